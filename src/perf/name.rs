use rand::Rng;
use rand::distributions::Alphanumeric;

pub const GENERATED_NAME_LEN: usize = 8;

/// Random `[a-zA-Z0-9]` test name drawn from `rng`.
pub fn random_test_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..GENERATED_NAME_LEN)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}
