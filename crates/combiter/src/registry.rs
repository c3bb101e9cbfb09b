//! Central registry of family metadata and constructors.

use crate::{
    error,
    families::{dyck::Dyck, motzkin::Motzkin},
    family::StepFamily,
};

/// Names accepted by [`construct`].
pub const FAMILY_NAMES: &[&str] = &["dyck", "motzkin"];

/// Construct a family by name with the requested size parameter (half the
/// path length).
///
/// Returns an error if the name is unknown or the size is out of range.
pub fn construct(name: &str, half_len: u32) -> error::Result<Box<dyn StepFamily + 'static>> {
    match name {
        "dyck" => Ok(Box::new(Dyck::new(half_len)?)),
        "motzkin" => Ok(Box::new(Motzkin::new(half_len)?)),
        _ => Err(error::Error::Name(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names() {
        for name in FAMILY_NAMES {
            let family = construct(name, 3).unwrap();
            assert_eq!(family.name(), *name);
            assert!(!family.is_empty());
        }
        assert!(construct("schroeder", 3).is_err());
    }
}
