//! Benchmark utilities for sync-bloom

pub mod utils {
    use rand::Rng;

    /// Random 20-byte keys
    pub fn generate_keys(count: usize) -> Vec<Vec<u8>> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| {
                let mut key = vec![0u8; 20];
                rng.fill(&mut key[..]);
                key
            })
            .collect()
    }

    /// Keys sharing a 16-byte prefix, differing only in a counter
    pub fn generate_adversarial_keys(count: usize) -> Vec<Vec<u8>> {
        let mut rng = rand::thread_rng();
        let prefix: [u8; 16] = rng.gen();

        (0..count)
            .map(|i| {
                let mut key = vec![0u8; 20];
                key[..16].copy_from_slice(&prefix);
                key[16..20].copy_from_slice(&(i as u32).to_le_bytes());
                key
            })
            .collect()
    }
}
