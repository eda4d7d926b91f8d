//! Unit tests for lift-motion.

use lift_core::{Floor, FleetConfig, LiftId, Tick};

use crate::{
    LiftPhase, LinearTravel, MotionEngine, MotionError, MotionEvent, MovementState, TravelModel,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn engine(lifts: u32) -> MotionEngine<LinearTravel> {
    let config = FleetConfig::new(lifts, 10);
    MotionEngine::new(LinearTravel::from_config(&config), &config)
}

fn doorless_engine(lifts: u32) -> MotionEngine<LinearTravel> {
    let config = FleetConfig { door_hold_ticks: 0, ..FleetConfig::new(lifts, 10) };
    MotionEngine::new(LinearTravel::from_config(&config), &config)
}

// ── MovementState ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement_state {
    use super::*;

    #[test]
    fn resting_progress_is_one() {
        let s = MovementState::resting(Floor(3), Tick(10));
        assert!(s.is_idle());
        assert_eq!(s.progress(Tick(10)), 1.0);
        assert_eq!(s.progress(Tick(99)), 1.0);
    }

    #[test]
    fn departing_progress_midpoint() {
        let s = MovementState {
            phase:          LiftPhase::Departing,
            origin:         Floor(1),
            destination:    Floor(5),
            departure_tick: Tick(0),
            arrival_tick:   Tick(800),
            phase_ends:     Tick(800),
        };
        assert!((s.progress(Tick(400)) - 0.5).abs() < 1e-6);
        assert_eq!(s.progress(Tick(0)), 0.0);
        assert_eq!(s.progress(Tick(800)), 1.0);
        assert_eq!(s.progress(Tick(900)), 1.0);
    }

    #[test]
    fn phase_labels() {
        assert_eq!(LiftPhase::DoorsOpen.to_string(), "doors_open");
        assert_eq!(LiftPhase::default(), LiftPhase::Idle);
    }
}

// ── TravelModel ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod travel {
    use super::*;

    #[test]
    fn linear_travel_is_distance_times_rate() {
        let t = LinearTravel::new(200);
        assert_eq!(t.travel_ticks(Floor(2), Floor(6)), 800);
        assert_eq!(t.travel_ticks(Floor(6), Floor(2)), 800);
        assert_eq!(t.travel_ticks(Floor(4), Floor(4)), 0);
    }
}

// ── MotionEngine ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion_engine {
    use super::*;

    #[test]
    fn all_lifts_start_resting_at_ground() {
        let e = engine(3);
        assert_eq!(e.states.len(), 3);
        assert!(e.states.iter().all(|s| s.is_idle() && s.origin == Floor(1)));
        assert_eq!(e.moving_count(), 0);
    }

    #[test]
    fn begin_move_returns_arrival() {
        let mut e = engine(1);
        e.place(LiftId(1), Floor(2), Tick(0)).unwrap();
        let arrival = e.begin_move(LiftId(1), Floor(2), Floor(6), Tick(100)).unwrap();
        assert_eq!(arrival, Tick(100 + 4 * 200));
        let s = e.state(LiftId(1)).unwrap();
        assert_eq!(s.phase, LiftPhase::Departing);
        assert_eq!(s.destination, Floor(6));
        assert_eq!(e.moving_count(), 1);
    }

    #[test]
    fn cannot_redirect_moving_lift() {
        let mut e = engine(1);
        e.begin_move(LiftId(1), Floor(1), Floor(5), Tick(0)).unwrap();
        let err = e.begin_move(LiftId(1), Floor(1), Floor(3), Tick(10)).unwrap_err();
        assert_eq!(err, MotionError::AlreadyMoving(LiftId(1)));
    }

    #[test]
    fn full_lifecycle_with_doors() {
        let mut e = engine(1);
        let arrive = e.begin_move(LiftId(1), Floor(1), Floor(3), Tick(0)).unwrap();
        assert_eq!(arrive, Tick(400));

        let t1 = e.advance(LiftId(1), arrive).unwrap();
        assert_eq!(t1.event, MotionEvent::Reached { floor: Floor(3), doors_opened: true });
        assert_eq!(t1.next_deadline, Some(Tick(3_400)));
        assert_eq!(e.state(LiftId(1)).unwrap().phase, LiftPhase::DoorsOpen);

        let t2 = e.advance(LiftId(1), Tick(3_400)).unwrap();
        assert_eq!(t2.event, MotionEvent::DoorsClosed { floor: Floor(3) });
        assert_eq!(t2.next_deadline, Some(Tick(5_400)));

        let t3 = e.advance(LiftId(1), Tick(5_400)).unwrap();
        assert_eq!(t3.event, MotionEvent::Settled { floor: Floor(3) });
        assert_eq!(t3.next_deadline, None);

        let s = e.state(LiftId(1)).unwrap();
        assert!(s.is_idle());
        assert_eq!(s.origin, Floor(3));
    }

    #[test]
    fn zero_door_hold_skips_doors_phase() {
        let mut e = doorless_engine(1);
        let arrive = e.begin_move(LiftId(1), Floor(1), Floor(2), Tick(0)).unwrap();
        let t1 = e.advance(LiftId(1), arrive).unwrap();
        assert_eq!(t1.event, MotionEvent::Reached { floor: Floor(2), doors_opened: false });
        assert_eq!(e.state(LiftId(1)).unwrap().phase, LiftPhase::Settling);
        assert_eq!(t1.next_deadline, Some(Tick(200 + 2_000)));

        let t2 = e.advance(LiftId(1), Tick(2_200)).unwrap();
        assert_eq!(t2.event, MotionEvent::Settled { floor: Floor(2) });
    }

    #[test]
    fn advancing_idle_lift_errors() {
        let mut e = engine(1);
        assert_eq!(e.advance(LiftId(1), Tick(0)), Err(MotionError::NotMoving(LiftId(1))));
    }

    #[test]
    fn unknown_lift_errors() {
        let mut e = engine(2);
        assert_eq!(e.state(LiftId(3)).unwrap_err(), MotionError::UnknownLift(LiftId(3)));
        assert_eq!(
            e.begin_move(LiftId(0), Floor(1), Floor(2), Tick(0)),
            Err(MotionError::UnknownLift(LiftId(0)))
        );
    }

    #[test]
    fn visual_position_interpolates_travel() {
        let mut e = engine(1);
        e.begin_move(LiftId(1), Floor(1), Floor(5), Tick(0)).unwrap();
        let (from, to, p) = e.visual_position(LiftId(1), Tick(200)).unwrap();
        assert_eq!((from, to), (Floor(1), Floor(5)));
        assert!((p - 0.25).abs() < 1e-6);
    }

    #[test]
    fn concurrent_moves_are_independent() {
        let mut e = engine(2);
        e.place(LiftId(2), Floor(8), Tick(0)).unwrap();
        let a = e.begin_move(LiftId(1), Floor(1), Floor(2), Tick(0)).unwrap();
        let b = e.begin_move(LiftId(2), Floor(8), Floor(2), Tick(50)).unwrap();
        assert_eq!(a, Tick(200));
        assert_eq!(b, Tick(50 + 6 * 200));
    }
}
