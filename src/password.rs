use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, SeedableRng};
use zeroize::Zeroizing;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()+~`}{[]:;?><,.-=";

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 14,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomSource {
    Fast,
    Secure,
}

pub fn build_pool(config: &GenerationConfig) -> Vec<u8> {
    let mut pool =
        Vec::with_capacity(UPPERCASE.len() + LOWERCASE.len() + NUMBERS.len() + SYMBOLS.len());

    // Pool order is fixed: uppercase, lowercase, numbers, symbols.
    if config.include_uppercase {
        pool.extend_from_slice(UPPERCASE);
    }
    if config.include_lowercase {
        pool.extend_from_slice(LOWERCASE);
    }
    if config.include_numbers {
        pool.extend_from_slice(NUMBERS);
    }
    if config.include_symbols {
        pool.extend_from_slice(SYMBOLS);
    }

    pool
}

pub fn pool_size(config: &GenerationConfig) -> usize {
    let mut size = 0;
    if config.include_uppercase {
        size += UPPERCASE.len();
    }
    if config.include_lowercase {
        size += LOWERCASE.len();
    }
    if config.include_numbers {
        size += NUMBERS.len();
    }
    if config.include_symbols {
        size += SYMBOLS.len();
    }
    size
}

pub fn generate(config: &GenerationConfig, source: RandomSource) -> Zeroizing<String> {
    match source {
        RandomSource::Fast => generate_with(config, &mut SmallRng::from_entropy()),
        RandomSource::Secure => generate_with(config, &mut OsRng),
    }
}

pub fn generate_with<R: Rng>(config: &GenerationConfig, rng: &mut R) -> Zeroizing<String> {
    let pool = build_pool(config);

    // Degenerate configuration: no class enabled, nothing to sample from.
    if pool.is_empty() {
        return Zeroizing::new(String::new());
    }

    let mut password = Zeroizing::new(String::with_capacity(config.length));

    for _ in 0..config.length {
        let index = rng.gen_range(0..pool.len());
        password.push(pool[index] as char);
    }

    password
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(
        length: usize,
        uppercase: bool,
        lowercase: bool,
        numbers: bool,
        symbols: bool,
    ) -> GenerationConfig {
        GenerationConfig {
            length,
            include_uppercase: uppercase,
            include_lowercase: lowercase,
            include_numbers: numbers,
            include_symbols: symbols,
        }
    }

    #[test]
    fn test_class_sizes() {
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(NUMBERS.len(), 10);
        assert_eq!(SYMBOLS.len(), 26);
    }

    #[test]
    fn test_classes_do_not_overlap() {
        use std::collections::HashSet;

        let full = build_pool(&GenerationConfig::default());
        println!("Full pool: {}", std::str::from_utf8(&full).unwrap());

        let unique: HashSet<_> = full.iter().collect();
        assert_eq!(unique.len(), full.len(), "Pool contains duplicates");
        assert_eq!(full.len(), 88);
    }

    #[test]
    fn test_pool_insertion_order() {
        let pool = build_pool(&config(1, true, true, true, true));

        let mut expected = Vec::new();
        expected.extend_from_slice(UPPERCASE);
        expected.extend_from_slice(LOWERCASE);
        expected.extend_from_slice(NUMBERS);
        expected.extend_from_slice(SYMBOLS);

        assert_eq!(pool, expected);
    }

    #[test]
    fn test_pool_single_class() {
        assert_eq!(build_pool(&config(1, false, false, true, false)), NUMBERS);
        assert_eq!(build_pool(&config(1, false, false, false, true)), SYMBOLS);
    }

    #[test]
    fn test_pool_size_matches_pool() {
        let configs = [
            config(1, true, true, true, true),
            config(1, true, false, true, false),
            config(1, false, false, false, false),
        ];

        for c in configs {
            assert_eq!(pool_size(&c), build_pool(&c).len());
        }
    }

    #[test]
    fn test_generate_length() {
        for length in [MIN_LENGTH, 14, 64, MAX_LENGTH] {
            let password = generate(&config(length, true, true, true, true), RandomSource::Fast);
            assert_eq!(password.len(), length);
        }
    }

    #[test]
    fn test_generate_charset() {
        let pool = build_pool(&config(64, true, true, true, true));
        let password = generate(&config(64, true, true, true, true), RandomSource::Fast);

        for ch in password.bytes() {
            assert!(
                pool.contains(&ch),
                "Password contains invalid character: \"{}\" (byte {})",
                ch as char,
                ch
            );
        }
    }

    #[test]
    fn test_uppercase_only_scenario() {
        let password = generate(&config(10, true, false, false, false), RandomSource::Fast);

        assert_eq!(password.len(), 10);
        for ch in password.chars() {
            assert!(ch.is_ascii_uppercase());
        }
    }

    #[test]
    fn test_all_classes_disabled_yields_empty() {
        let password = generate(&config(8, false, false, false, false), RandomSource::Fast);
        assert_eq!(*password, "");

        let password = generate(&config(128, false, false, false, false), RandomSource::Secure);
        assert_eq!(*password, "");
    }

    #[test]
    fn test_secure_source() {
        let password = generate(&config(20, true, true, true, true), RandomSource::Secure);
        let pool = build_pool(&config(20, true, true, true, true));

        assert_eq!(password.len(), 20);
        for ch in password.bytes() {
            assert!(pool.contains(&ch));
        }
    }

    #[test]
    fn test_same_config_same_length() {
        let c = config(32, true, true, false, false);
        let first = generate(&c, RandomSource::Fast);
        let second = generate(&c, RandomSource::Fast);

        // Outputs need not match, only their lengths must.
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn test_seeded_rng_reproducible() {
        let c = config(48, true, true, true, true);

        let mut rng1 = SmallRng::seed_from_u64(42);
        let mut rng2 = SmallRng::seed_from_u64(42);

        let first = generate_with(&c, &mut rng1);
        let second = generate_with(&c, &mut rng2);

        assert_eq!(*first, *second);
    }

    #[test]
    fn test_numbers_distribution_uniform() {
        // Chi-square goodness of fit over the Numbers class: 100 passwords of
        // length 1000 gives 100_000 samples across 10 bins. With 9 degrees of
        // freedom the statistic stays far below 40 for a uniform sampler.
        let c = config(1000, false, false, true, false);
        let mut rng = SmallRng::seed_from_u64(7);

        let mut counts = [0u64; 10];
        for _ in 0..100 {
            let password = generate_with(&c, &mut rng);
            for ch in password.bytes() {
                counts[(ch - b'0') as usize] += 1;
            }
        }

        let total: u64 = counts.iter().sum();
        assert_eq!(total, 100_000);

        let expected = total as f64 / 10.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();

        println!("Chi-square statistic: {:.3}", chi_square);
        assert!(
            chi_square < 40.0,
            "Distribution over Numbers is not uniform (chi-square = {:.3})",
            chi_square
        );
    }

    #[test]
    fn test_default_config() {
        let c = GenerationConfig::default();
        assert_eq!(c.length, 14);
        assert!(c.include_uppercase && c.include_lowercase);
        assert!(c.include_numbers && c.include_symbols);
    }
}
