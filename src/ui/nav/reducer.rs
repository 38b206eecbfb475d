use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::NavPosition;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavPosition;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (NavPosition::List, NavIntent::Open) => NavPosition::Detail,
            (NavPosition::Detail, NavIntent::Back) => NavPosition::List,
            (_, NavIntent::Reset) => NavPosition::List,
            // Detail + Open re-renders Detail; List + Back has nothing to pop.
            (other, _) => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_back_round_trips() {
        let state = NavReducer::reduce(NavPosition::default(), NavIntent::Open);
        assert_eq!(state, NavPosition::Detail);
        assert_eq!(NavReducer::reduce(state, NavIntent::Back), NavPosition::List);
    }

    #[test]
    fn back_on_list_is_noop() {
        assert_eq!(
            NavReducer::reduce(NavPosition::List, NavIntent::Back),
            NavPosition::List
        );
    }

    #[test]
    fn reset_always_lands_on_list() {
        for state in [NavPosition::List, NavPosition::Detail] {
            assert_eq!(NavReducer::reduce(state, NavIntent::Reset), NavPosition::List);
        }
    }
}
