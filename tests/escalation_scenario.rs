//! End-to-end escalation through the public controller API

use be_mine::controller::Layout;
use be_mine::sim::{GameState, HostileControl, Rect, Size, Tier};
use be_mine::tuning::ConfettiBurst;
use be_mine::{Controller, DismissControl, DismissOutcome, FixedLayout, Tuning, ViewModel};
use proptest::prelude::*;

fn card() -> FixedLayout {
    FixedLayout(Some(Layout {
        container: Rect::new(0.0, 0.0, 300.0, 300.0),
        element: Size::new(50.0, 30.0),
        obstacles: vec![
            Rect::new(100.0, 100.0, 50.0, 50.0),
            Rect::new(20.0, 20.0, 260.0, 40.0),
        ],
    }))
}

fn dismiss(c: &mut Controller, n: u32) {
    let layout = card();
    for _ in 0..n {
        c.on_dismiss(&layout, 0.0);
    }
}

#[test]
fn two_strikes_walkthrough() {
    let mut c = Controller::new(7, Tuning::default());

    dismiss(&mut c, 3);
    assert_eq!(c.view().dismiss_label(), Some("sochle"));
    assert!((c.state().scale() - 1.282).abs() < 1e-9);

    dismiss(&mut c, 2);
    assert_eq!(c.state().dismiss_attempts, 5);
    assert_eq!(c.view().dismiss_label(), Some("Mt maan"));

    dismiss(&mut c, 3);
    assert_eq!(c.state().tier(), Tier::Hostile);
    assert_eq!(
        c.state().hostile_control(),
        Some(HostileControl::SecondChance)
    );
    c.advance(f64::MAX);
    assert!(matches!(
        c.view(),
        ViewModel::Proposal {
            dismiss: DismissControl::SecondChance { visible: true, .. },
            ..
        }
    ));

    assert!(c.on_reset());
    assert_eq!(c.state().dismiss_attempts, 0);
    assert_eq!(c.state().reset_count, 1);
    assert_eq!(c.state().scale(), 1.0);
    assert_eq!(c.view().dismiss_label(), Some("No"));

    dismiss(&mut c, 8);
    assert_eq!(c.state().hostile_control(), Some(HostileControl::Refusal));
    let before = c.state().clone();
    assert!(!c.on_reset());
    assert_eq!(c.on_dismiss(&card(), 0.0), DismissOutcome::Ignored);
    assert_eq!(c.state(), &before);
}

#[test]
fn accepted_view_is_frozen() {
    let mut c = Controller::new(7, Tuning::default());
    dismiss(&mut c, 2);

    let mut fired = 0;
    assert!(c.on_accept(&mut |_: &ConfettiBurst| fired += 1));
    let frozen = c.view();

    dismiss(&mut c, 5);
    c.on_reset();
    c.advance(1e9);
    assert_eq!(c.view(), frozen);
    assert_eq!(fired, 1);
}

#[test]
fn tuning_reshapes_the_ladder() {
    let tuning = Tuning::from_json(
        r#"{"ladder": {"hesitant_at": 1, "insistent_at": 2, "hostile_at": 3}}"#,
    )
    .unwrap();
    let mut c = Controller::new(1, tuning);

    dismiss(&mut c, 1);
    assert_eq!(c.view().dismiss_label(), Some("sochle"));
    dismiss(&mut c, 2);
    assert_eq!(c.state().tier(), Tier::Hostile);
}

proptest! {
    #[test]
    fn label_depends_only_on_attempts(attempts in 0u32..8, resets in 0u32..=1) {
        let mut state = GameState::new();
        if resets == 1 {
            for _ in 0..8 {
                state.dismiss();
            }
            state.reset();
        }
        for _ in 0..attempts {
            state.dismiss();
        }

        let expected = match attempts {
            0..=2 => "No",
            3..=4 => "sochle",
            _ => "Mt maan",
        };
        prop_assert_eq!(state.label(), expected);
    }
}

proptest! {
    #[test]
    fn scale_follows_formula(n in 0u32..8) {
        let mut state = GameState::new();
        for _ in 0..n {
            state.dismiss();
        }
        let expected = (1.0 + 0.094 * n as f64).min(1.75);
        prop_assert!((state.scale() - expected).abs() < 1e-9);
        prop_assert!(state.scale() >= 1.0 && state.scale() <= 1.75);
    }
}

proptest! {
    #[test]
    fn accept_is_terminal_from_any_open_state(attempts in 0u32..8) {
        let mut state = GameState::new();
        for _ in 0..attempts {
            state.dismiss();
        }
        prop_assert!(state.accept());
        let frozen = state.clone();
        state.dismiss();
        state.reset();
        prop_assert_eq!(state.tier(), Tier::Accepted);
        prop_assert_eq!(state, frozen);
    }
}
