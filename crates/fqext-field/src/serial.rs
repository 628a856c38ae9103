//! Serializable descriptions of fields and elements.

use fqext_integers::{Integer, PrimeField};
use fqext_poly::FpPoly;
use serde::{Deserialize, Serialize};

use crate::element::FqElem;
use crate::error::{FieldError, FieldResult};
use crate::field::FqField;

fn default_var() -> String {
    "a".to_string()
}

/// The defining data of a field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// The prime `p`.
    pub characteristic: Integer,
    /// Modulus coefficients, low to high.
    pub modulus: Vec<Integer>,
    /// Display name of the generator.
    #[serde(default = "default_var")]
    pub var: String,
}

/// The coefficients of an element, low to high.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRepr {
    /// Exactly `d` residues.
    pub coeffs: Vec<Integer>,
}

impl FqField {
    /// Returns the data needed to rebuild this field.
    #[must_use]
    pub fn descriptor(&self) -> FieldDescriptor {
        FieldDescriptor {
            characteristic: self.characteristic().clone(),
            modulus: self.modulus().coeffs().to_vec(),
            var: self.var().to_string(),
        }
    }

    /// Rebuilds a field, revalidating the characteristic and modulus.
    ///
    /// # Errors
    ///
    /// Same as [`FqField::new`].
    pub fn from_descriptor(descriptor: &FieldDescriptor) -> FieldResult<Self> {
        let p = descriptor.characteristic.clone();
        let prime = PrimeField::new(p.clone()).ok_or_else(|| FieldError::InvalidCharacteristic(p.clone()))?;
        let field = Self::new(p, FpPoly::new(&prime, descriptor.modulus.clone()))?;
        if field.var() == descriptor.var {
            Ok(field)
        } else {
            Ok(field.with_var(&descriptor.var))
        }
    }

    /// Rebuilds an element of this field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::LengthMismatch`] if the representation does not
    /// have exactly `d` coefficients.
    pub fn element_from_repr(&self, repr: &ElementRepr) -> FieldResult<FqElem> {
        self.from_coeffs(repr.coeffs.iter().cloned())
    }
}

impl FqElem {
    /// Returns the coefficient representation.
    #[must_use]
    pub fn to_repr(&self) -> ElementRepr {
        ElementRepr {
            coeffs: self.coeffs().to_vec(),
        }
    }
}
