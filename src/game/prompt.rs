use rand::Rng;

/// Letters common enough that a random pairing is usually findable in some word
pub const EASY_CHARS: &[u8] = b"aeioustrnl";

/// Generate the next prompt fragment.
///
/// Half the time the prompt is a real word start drawn from the dictionary's
/// prefix set; otherwise it is two letters drawn independently from
/// [`EASY_CHARS`]. An empty prefix set always falls through to the easy-letter
/// pair, so generation cannot fail or loop. Repeats of earlier prompts are
/// allowed.
pub fn generate(prefixes: &[String]) -> String {
    let mut rng = rand::rng();

    if !prefixes.is_empty() && rng.random_bool(0.5) {
        let idx = rng.random_range(0..prefixes.len());
        return prefixes[idx].clone();
    }

    (0..2)
        .map(|_| {
            let idx = rng.random_range(0..EASY_CHARS.len());
            EASY_CHARS[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_easy_pair(prompt: &str) -> bool {
        prompt.len() == 2 && prompt.bytes().all(|b| EASY_CHARS.contains(&b))
    }

    #[test]
    fn test_empty_prefixes_falls_back_to_easy_pair() {
        for _ in 0..100 {
            let prompt = generate(&[]);
            assert!(
                is_easy_pair(&prompt),
                "prompt '{}' should be built from easy letters",
                prompt
            );
        }
    }

    #[test]
    fn test_prompt_is_prefix_or_easy_pair() {
        let prefixes = vec!["qw".to_string(), "zx".to_string()];
        for _ in 0..100 {
            let prompt = generate(&prefixes);
            assert!(
                prefixes.contains(&prompt) || is_easy_pair(&prompt),
                "prompt '{}' is neither a known prefix nor an easy pair",
                prompt
            );
        }
    }

    #[test]
    fn test_prompt_shape() {
        let prefixes = vec!["ab".to_string()];
        for _ in 0..100 {
            let prompt = generate(&prefixes);
            assert_eq!(prompt.chars().count(), 2);
            assert!(prompt
                .chars()
                .all(|c| c.is_ascii_alphabetic() && c.is_ascii_lowercase()));
        }
    }
}
