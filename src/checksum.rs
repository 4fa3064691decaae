/// Sums `data` with 8-bit wraparound at every step.
pub fn checksum(data: &[u8]) -> u8 {
    let mut sum: u8 = 0;
    for byte in data.iter().copied() {
        sum = sum.wrapping_add(byte);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::checksum;

    #[test]
    fn example() {
        assert_eq!(checksum(&[0x3c, 0x00, 0x96, 0x00, 0x34, 0x12]), 0x18);
    }

    #[test]
    fn wraps_around() {
        assert_eq!(checksum(&[0xff, 0x01]), 0x00);
        assert_eq!(checksum(&[0xff; 6]), 0xfa);
    }

    #[test]
    fn empty() {
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn matches_modulo_sum() {
        for seed in 0u32..512 {
            let data: [u8; 6] = core::array::from_fn(|i| (seed.wrapping_mul(31 + i as u32) >> 1) as u8);
            let wide: u32 = data.iter().map(|&b| u32::from(b)).sum();
            assert_eq!(checksum(&data), (wide % 256) as u8);
        }
    }
}
