/// Sees each iteration record as a solver produces it.
///
/// Returning `Some(action)` asks the solver to act on it (the root finders
/// understand a request to stop early); `None` lets it carry on. Any
/// `FnMut(&E) -> Option<A>` closure is an observer, and `()` observes nothing.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive<O: Observer<usize, Action>>(mut observer: O, events: usize) -> Option<usize> {
        for event in 1..=events {
            if observer.observe(&event) == Some(Action::Stop) {
                return Some(event);
            }
        }
        None
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_observer_can_stop() {
        let mut seen = Vec::new();
        let stopped_at = drive(
            |event: &usize| {
                seen.push(*event);
                (*event == 3).then_some(Action::Stop)
            },
            10,
        );
        assert_eq!(stopped_at, Some(3));
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
