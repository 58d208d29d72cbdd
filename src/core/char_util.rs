// full char -> half char && lowercase
pub fn regularize(input: char) -> char {
    let mut input_code = input as u32;
    if input_code == 12288 {
        input_code -= 12256; // space
    } else if (65281..=65374).contains(&input_code) {
        input_code -= 65248; // full width
    }
    if input_code >= 'A' as u32 && input_code <= 'Z' as u32 {
        input_code += 32; // lowercase
    }

    char::from_u32(input_code).unwrap_or(input)
}

pub fn regularize_str(input: &str) -> String {
    input.chars().map(regularize).collect()
}

/// Splits text into whitespace-delimited words, regularized.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(regularize_str)
}
