use bit_set::BitSet;

const WINDOW: usize = 1024;

/// Smallest prime `>= n`, or `None` when no such prime fits in `usize`.
/// Prime capacities let a double-hashing stride reach every slot.
pub fn next_prime(n: usize) -> Option<usize> {
    let mut low = n.max(2);
    loop {
        let high = low.saturating_add(WINDOW);
        if low >= high {
            return None;
        }
        let composite = sieve_window(low, high);
        if let Some(prime) = (low..high).find(|&i| !composite.contains(i - low)) {
            return Some(prime);
        }
        low = high;
    }
}

fn sieve_window(low: usize, high: usize) -> BitSet {
    let mut composite = BitSet::with_capacity(high - low);
    let mut d = 2;
    while d <= (high - 1) / d {
        if let Some(first) = low.div_ceil(d).checked_mul(d) {
            for multiple in (first.max(d * d)..high).step_by(d) {
                composite.insert(multiple - low);
            }
        }
        d += 1;
    }
    composite
}
