use crate::Element;

/// A fixed-length state vector that an integrator can step in place.
///
/// Implementors expose their entries as a slice and know how to allocate
/// zero-filled scratch space of the same length and element type. Scratch
/// space is allocated once, when an integrator is built, and reused for every
/// step afterwards.
///
/// Implemented for:
///
/// - `Vec<T>` — the general-purpose owned vector
/// - `Box<[T]>` — an owned vector that will never grow
/// - `[T; N]` — a fixed-size array, with scratch kept on the stack
/// - `&mut [T]` — a borrowed buffer the caller keeps ownership of
pub trait StateVector {
    /// The scalar type of each entry.
    type Element: Element;

    /// Scratch storage with the same length and element type as the state.
    type Scratch: AsRef<[Self::Element]> + AsMut<[Self::Element]>;

    /// Returns the entries of the state.
    fn as_slice(&self) -> &[Self::Element];

    /// Returns the entries of the state for in-place mutation.
    fn as_mut_slice(&mut self) -> &mut [Self::Element];

    /// Allocates zero-filled scratch storage matching this state.
    fn scratch(&self) -> Self::Scratch;

    /// Returns the number of entries.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the state has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Element> StateVector for Vec<T> {
    type Element = T;
    type Scratch = Vec<T>;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn scratch(&self) -> Vec<T> {
        vec![T::zero(); self.len()]
    }
}

impl<T: Element> StateVector for Box<[T]> {
    type Element = T;
    type Scratch = Box<[T]>;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn scratch(&self) -> Box<[T]> {
        vec![T::zero(); self.len()].into_boxed_slice()
    }
}

impl<T: Element, const N: usize> StateVector for [T; N] {
    type Element = T;
    type Scratch = [T; N];

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn scratch(&self) -> [T; N] {
        [T::zero(); N]
    }
}

impl<T: Element> StateVector for &mut [T] {
    type Element = T;
    type Scratch = Vec<T>;

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn scratch(&self) -> Vec<T> {
        vec![T::zero(); self.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_traits::Zero;

    fn assert_zeroed_scratch<S: StateVector>(state: &S) {
        let scratch = state.scratch();
        assert_eq!(scratch.as_ref().len(), state.len());
        assert!(scratch.as_ref().iter().all(|x| x.is_zero()));
    }

    #[test]
    fn vec_scratch_matches_length() {
        assert_zeroed_scratch(&vec![1.0_f64, 2.0, 3.0]);
        assert_zeroed_scratch(&vec![1.0_f32]);
    }

    #[test]
    fn boxed_scratch_matches_length() {
        let state: Box<[f64]> = vec![4.0, 5.0].into_boxed_slice();
        assert_zeroed_scratch(&state);
    }

    #[test]
    fn array_scratch_matches_length() {
        assert_zeroed_scratch(&[1.0_f32, -1.0, 0.5, 2.0]);
    }

    #[test]
    fn borrowed_scratch_is_owned() {
        let mut buffer = [3.0_f64, 4.0];
        let state: &mut [f64] = &mut buffer;
        let scratch: Vec<f64> = state.scratch();
        assert_eq!(scratch, vec![0.0, 0.0]);
    }

    #[test]
    fn borrowed_state_writes_through() {
        let mut buffer = vec![1.0_f64, 2.0];
        {
            let mut state: &mut [f64] = &mut buffer;
            StateVector::as_mut_slice(&mut state)[1] = 7.0;
        }
        assert_eq!(buffer, vec![1.0, 7.0]);
    }

    #[test]
    fn empty_state_reports_empty() {
        let state: Vec<f64> = Vec::new();
        assert!(state.is_empty());
        assert!(!vec![0.0_f64].is_empty());
    }
}
