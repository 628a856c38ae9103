//! A short tour of the field API.
//!
//! Run with `RUST_LOG=debug` to see field construction, Conway table
//! lookups and embedding root selection.

use fqext::prelude::*;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

fn main() -> Result<(), FieldError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default().with(env_filter).with(fmt::layer()).init();

    // GF(2^4) with x^4 + x + 1
    let gf16 = FqField::from_i64_modulus(2, &[1, 1, 0, 0, 1])?;
    let g = gf16.generator();
    info!(field = %gf16, order = ?g.multiplicative_order(), "generator of {}", gf16.modulus());

    // GF(5^3) from the Conway table
    let gf125 = FqField::cached_conway(&Integer::new(5), 3)?;
    let x = gf125.from_coeffs([1i64, 2, 3])?;
    let y = x.try_div(&gf125.generator())?;
    info!(%x, %y, trace = %x.absolute_trace(), norm = %x.absolute_norm(), "arithmetic");

    let square = x.square();
    let root = square.sqrt(true)?;
    info!(%square, %root, "square root");
    info!(minpoly = %x.minimal_polynomial(), "minimal polynomial of {x}");

    // GF(2^2) inside GF(2^4)
    let gf4 = FqField::cached_conway(&Integer::new(2), 2)?;
    let w = gf4.generator();
    let image = gf16.coerce(&w)?;
    info!(%w, %image, back = %gf4.coerce(&image)?, "embedding GF(4) -> GF(16)");

    // Large characteristic
    let p = Integer::new(2).pow(127) - Integer::new(1);
    let prime = PrimeField::new(p.clone()).ok_or_else(|| FieldError::InvalidCharacteristic(p.clone()))?;
    let big = FqField::new(p, FpPoly::from_i64(&prime, &[1, 0, 1]))?.with_var("i");
    let i = big.generator();
    info!(field = %big, i_squared = %i.square(), conjugate = %i.frobenius(1), "Gaussian extension");

    Ok(())
}
