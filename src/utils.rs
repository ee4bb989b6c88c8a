// SPDX-License-Identifier: GPL-3.0-only

/// Helper to scale some data from PokeApi such as weight...
/// scales a number down by dividing it by 10, converting it to a floating-point
pub fn scale_numbers(num: i64) -> f64 {
    (num as f64) / 10.0
}

/// Pokédex number padded to at least three digits
pub fn padded_id(id: i64) -> String {
    format!("{id:03}")
}

/// Transforms a kebab-case string into a space-separated one, the casing is left to the stylesheet
pub fn spaced_string(input: &str) -> String {
    input.replace('-', " ")
}

/// Joins the first `count` names, kebab-case turned into words
pub fn join_names<'a>(names: impl IntoIterator<Item = &'a str>, count: usize) -> String {
    names
        .into_iter()
        .take(count)
        .map(spaced_string)
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn measures_are_scaled_down() {
        assert_eq!(scale_numbers(7).to_string(), "0.7");
        assert_eq!(scale_numbers(69).to_string(), "6.9");
        assert_eq!(scale_numbers(10).to_string(), "1");
        assert_eq!(scale_numbers(9999).to_string(), "999.9");
    }

    #[test]
    fn ids_are_zero_padded() {
        assert_eq!(padded_id(1), "001");
        assert_eq!(padded_id(25), "025");
        assert_eq!(padded_id(151), "151");
        assert_eq!(padded_id(1025), "1025");
    }

    #[test]
    fn only_the_first_names_are_joined() {
        assert_eq!(
            join_names(["static", "lightning-rod", "extra-one"], 2),
            "static, lightning rod"
        );
        assert_eq!(join_names(["run-away"], 2), "run away");
        assert_eq!(join_names(Vec::<&str>::new(), 2), "");
        assert_eq!(spaced_string("a-b-c"), "a b c");
    }
}
