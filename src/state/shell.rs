//! State rendered by the shell component: pull indicator and offline banner.

use std::rc::Rc;
use yew::Reducible;

use crate::gesture::IndicatorState;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShellState {
    pub indicator: IndicatorState,
    pub offline: bool,
}

pub enum ShellAction {
    Indicator(IndicatorState),
    SetOnline(bool),
}

impl Reducible for ShellState {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ShellAction::*;
        match action {
            Indicator(indicator) if indicator != self.indicator => Rc::new(Self {
                indicator,
                ..(*self).clone()
            }),
            SetOnline(online) if online == self.offline => Rc::new(Self {
                offline: !online,
                ..(*self).clone()
            }),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::pull::PullLabel;

    #[test]
    fn offline_toggles_banner() {
        let s = Rc::new(ShellState::default());
        let s = s.reduce(ShellAction::SetOnline(false));
        assert!(s.offline);
        let s = s.reduce(ShellAction::SetOnline(true));
        assert!(!s.offline);
    }

    #[test]
    fn unchanged_indicator_keeps_same_state() {
        let s = Rc::new(ShellState::default());
        let next = s.clone().reduce(ShellAction::Indicator(IndicatorState::default()));
        assert!(Rc::ptr_eq(&s, &next));

        let moved = IndicatorState {
            top_px: -10.0,
            label: PullLabel::Pull,
            active: false,
        };
        let next = s.reduce(ShellAction::Indicator(moved));
        assert_eq!(next.indicator, moved);
    }
}
