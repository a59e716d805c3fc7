use heck::ToSnakeCase;

/// Convert a raw name to lowercase-with-underscores word form: split on case
/// and word boundaries, lowercase, join with underscores.
pub fn underscore(name: &str) -> String {
    name.to_snake_case()
}

/// Capitalize the first character, leaving the rest of the name untouched.
pub fn initial_caps(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underscore_splits_word_boundaries() {
        assert_eq!(underscore("petStore"), "pet_store");
        assert_eq!(underscore("PetStore"), "pet_store");
        assert_eq!(underscore("HTTPRequest"), "http_request");
        assert_eq!(underscore("pet_store"), "pet_store");
    }

    #[test]
    fn underscore_is_idempotent() {
        for name in ["petStore", "HTTPRequest", "already_snake"] {
            let once = underscore(name);
            assert_eq!(underscore(&once), once);
        }
    }

    #[test]
    fn initial_caps_leaves_rest_untouched() {
        assert_eq!(initial_caps("pets"), "Pets");
        assert_eq!(initial_caps("pet-store"), "Pet-store");
        assert_eq!(initial_caps("Already"), "Already");
    }

    #[test]
    fn initial_caps_empty_input() {
        assert_eq!(initial_caps(""), "");
    }
}
