//! `SequenceContainer` adapters for the four container kinds.
//!
//! | Kind           | Type              | Module        |
//! |----------------|-------------------|---------------|
//! | `Contiguous`   | `Vec<T>`          | [`vec`]       |
//! | `Segmented`    | `VecDeque<T>`     | [`deque`]     |
//! | `DoublyLinked` | `LinkedList<T>`   | [`list`]      |
//! | `SinglyLinked` | [`ForwardList<T>`](crate::ds::ForwardList) | [`forward`] |
//!
//! Each adapter maps the shared vocabulary onto the native idiom of its
//! kind. Inside the impls every call goes through a fully qualified path
//! (`Vec::len(self)`, `<[T]>::reverse`) so that a trait method never
//! resolves back to itself through auto-ref.

pub mod deque;
pub mod forward;
pub mod list;
pub mod vec;

#[cfg(test)]
pub(crate) fn keys<C: crate::traits::SequenceContainer>(container: &C) -> Vec<usize> {
    use crate::element::Element;
    container.iter().map(Element::key).collect()
}
