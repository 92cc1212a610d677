/// Source of uniform random integers used by the noisy channel.
///
/// The simulator never touches a global RNG; every draw goes through this
/// trait so tests can replay a fixed sequence.
pub trait RandomSource {
    /// Return an integer drawn uniformly from `[0, bound)`.
    /// Callers guarantee `bound > 0`.
    fn below(&mut self, bound: usize) -> usize;
}
