use rand::Rng;

/// Creates a random alphanumeric secret of the given length
pub fn create_random_secret(secret_len: usize) -> String {
    let mut rng = rand::thread_rng();
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    (0..secret_len)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Creates a string of `len` random decimal digits, leading zeros included
pub fn create_random_digits(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(0..10).to_string()).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generates_secret_of_wanted_length() {
        for len in [0, 1, 16, 64] {
            assert_eq!(create_random_secret(len).len(), len);
        }
    }

    #[test]
    fn generates_only_digits() {
        let digits = create_random_digits(50);
        assert_eq!(digits.len(), 50);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
