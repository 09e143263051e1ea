//! Viewport reveal controller
//!
//! Owns the registration table and decides, on every observation tick, which
//! targets start their entrance or exit animation.
//!
//! # Tick rules
//!
//! | state            | trigger line | action                                  |
//! |------------------|--------------|-----------------------------------------|
//! | Unseen / Hidden  | crossed      | Enter after `stagger(index)`            |
//! | Visible          | not crossed  | Exit immediately                        |
//! | Entering         | not crossed  | cancel, Exit immediately                |
//! | Exiting          | crossed      | cancel, Enter immediately               |
//!
//! A target counts as crossed while its top edge is at or above the trigger
//! line. Scrolling further down never hides an element again; only scrolling
//! it back below the line does.

use std::collections::{BTreeMap, HashSet};
use std::time::{Duration, Instant};

use super::animator::{AnimationCommand, AnimationHandle, Animator, Direction, Pose};
use super::error::RegistrationError;
use super::observer::PositionObserver;
use super::stagger::StaggerPolicy;
use super::types::{RevealBatch, RevealState, RevealTarget, TargetId, TriggerOffset};

/// Handle returned by [`RevealController::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistrationHandle(pub u64);

/// Controller-wide behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerConfig {
    /// Trigger used by [`RevealController::register_default`]
    pub default_trigger: TriggerOffset,
    pub stagger_policy: StaggerPolicy,
    /// Observe elements added to a batch after registration
    pub auto_observe_mutations: bool,
}

/// What one tick did, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub entered: usize,
    pub exited: usize,
    /// Mid-animation direction changes
    pub reversed: usize,
    /// Animations that settled into Visible / Hidden
    pub completed: usize,
    /// Targets without a usable measurement
    pub skipped: usize,
    /// Targets reset to Unseen after an inconsistency
    pub reset: usize,
}

impl TickReport {
    /// Number of animation commands issued during the tick
    pub fn commands(&self) -> usize {
        self.entered + self.exited + self.reversed
    }

    pub fn is_quiet(&self) -> bool {
        self.commands() == 0 && self.completed == 0 && self.reset == 0
    }
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    handle: AnimationHandle,
    direction: Direction,
    /// `None` when the schedule overflows the clock; settles only by reversal
    settles_at: Option<Instant>,
}

#[derive(Debug)]
struct Tracked {
    target: RevealTarget,
    state: RevealState,
    in_flight: Option<InFlight>,
}

impl Tracked {
    fn new(target: RevealTarget) -> Self {
        Self {
            target,
            state: RevealState::Unseen,
            in_flight: None,
        }
    }

    /// Move to `next`, or reset to Unseen when the edge is illegal
    fn advance(&mut self, next: RevealState) -> bool {
        if self.state.can_advance_to(next) {
            self.state = next;
            true
        } else {
            tracing::warn!(
                "Reveal target {} cannot go from {:?} to {:?}, resetting",
                self.target.id,
                self.state,
                next
            );
            self.state = RevealState::Unseen;
            false
        }
    }

    /// Finish an animation whose time is up
    fn settle(&mut self, now: Instant) -> bool {
        let Some(flight) = self.in_flight else {
            return false;
        };
        match flight.settles_at {
            Some(at) if now >= at => {
                self.in_flight = None;
                let next = match flight.direction {
                    Direction::Enter => RevealState::Visible,
                    Direction::Exit => RevealState::Hidden,
                };
                self.advance(next)
            }
            _ => false,
        }
    }

    fn is_consistent(&self) -> bool {
        self.state.is_transitioning() == self.in_flight.is_some()
    }
}

#[derive(Debug)]
struct BatchRecord {
    trigger: TriggerOffset,
    stagger_step: Duration,
    targets: Vec<Tracked>,
}

/// Tracks registered batches and drives their reveal animations
#[derive(Debug)]
pub struct RevealController<A: Animator> {
    animator: A,
    config: ControllerConfig,
    batches: BTreeMap<RegistrationHandle, BatchRecord>,
    next_handle: u64,
}

impl<A: Animator> RevealController<A> {
    pub fn new(animator: A, config: ControllerConfig) -> Self {
        Self {
            animator,
            config,
            batches: BTreeMap::new(),
            next_handle: 0,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ControllerConfig) {
        self.config = config;
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Start observing a batch
    ///
    /// Every target is snapped to its hidden pose. Identifiers already owned by
    /// another batch move to this one; a batch left empty by that is dropped.
    pub fn register(
        &mut self,
        batch: RevealBatch,
        trigger: TriggerOffset,
    ) -> Result<RegistrationHandle, RegistrationError> {
        if batch.is_empty() {
            return Err(RegistrationError::EmptyBatch);
        }

        let mut ids = HashSet::with_capacity(batch.len());
        for target in batch.targets() {
            if !ids.insert(target.id.clone()) {
                return Err(RegistrationError::DuplicateTarget(target.id.clone()));
            }
        }

        self.evict(&ids);

        let stagger_step = batch.stagger_step();
        let mut targets = Vec::with_capacity(batch.len());
        for target in batch.into_targets() {
            self.animator.place(&target.id, Pose::hidden(&target.profile));
            targets.push(Tracked::new(target));
        }

        self.next_handle += 1;
        let handle = RegistrationHandle(self.next_handle);
        tracing::info!(
            "Registered reveal batch {} ({} targets, stagger {:?})",
            handle.0,
            targets.len(),
            stagger_step
        );

        self.batches.insert(
            handle,
            BatchRecord {
                trigger,
                stagger_step,
                targets,
            },
        );
        Ok(handle)
    }

    /// Start observing a batch at the configured default trigger
    pub fn register_default(
        &mut self,
        batch: RevealBatch,
    ) -> Result<RegistrationHandle, RegistrationError> {
        let trigger = self.config.default_trigger;
        self.register(batch, trigger)
    }

    /// Stop observing a batch and cancel its animations
    ///
    /// Returns false (and does nothing) for a handle that is already gone.
    pub fn deregister(&mut self, handle: RegistrationHandle) -> bool {
        let Some(record) = self.batches.remove(&handle) else {
            tracing::debug!("Reveal batch {} already deregistered", handle.0);
            return false;
        };

        for tracked in &record.targets {
            if let Some(flight) = tracked.in_flight {
                self.animator.cancel(flight.handle);
            }
            self.animator.release(&tracked.target.id);
        }

        tracing::info!(
            "Deregistered reveal batch {} ({} targets)",
            handle.0,
            record.targets.len()
        );
        true
    }

    /// Deregister every batch
    pub fn clear(&mut self) {
        let handles: Vec<RegistrationHandle> = self.batches.keys().copied().collect();
        for handle in handles {
            self.deregister(handle);
        }
    }

    /// Append late-added elements to a registered batch
    ///
    /// Returns how many targets are now observed. With
    /// `auto_observe_mutations` off the elements are left alone and stay in
    /// their resting pose.
    ///
    /// Pages lay out their cards up front, so the app itself never grows a
    /// batch after mounting.
    #[allow(dead_code)]
    pub fn extend<I>(
        &mut self,
        handle: RegistrationHandle,
        targets: I,
    ) -> Result<usize, RegistrationError>
    where
        I: IntoIterator<Item = RevealTarget>,
    {
        if !self.batches.contains_key(&handle) {
            return Err(RegistrationError::UnknownHandle(handle));
        }

        let targets: Vec<RevealTarget> = targets.into_iter().collect();
        if !self.config.auto_observe_mutations {
            tracing::debug!(
                "Ignoring {} late targets for batch {} (mutation observing disabled)",
                targets.len(),
                handle.0
            );
            return Ok(0);
        }

        {
            let mut known: HashSet<&TargetId> = self
                .batches
                .values()
                .flat_map(|record| record.targets.iter().map(|t| &t.target.id))
                .collect();
            for target in &targets {
                if !known.insert(&target.id) {
                    return Err(RegistrationError::DuplicateTarget(target.id.clone()));
                }
            }
        }

        let Self {
            animator, batches, ..
        } = self;
        let record = batches
            .get_mut(&handle)
            .ok_or(RegistrationError::UnknownHandle(handle))?;

        let base = record.targets.len();
        let added = targets.len();
        for (offset, mut target) in targets.into_iter().enumerate() {
            target.index = base + offset;
            animator.place(&target.id, Pose::hidden(&target.profile));
            record.targets.push(Tracked::new(target));
        }

        tracing::debug!("Batch {} now observes {} late targets", handle.0, added);
        Ok(added)
    }

    /// Re-evaluate every target against the current viewport
    pub fn tick<O>(&mut self, observer: &O, now: Instant) -> TickReport
    where
        O: PositionObserver + ?Sized,
    {
        let viewport = observer.viewport();
        let policy = self.config.stagger_policy;
        let mut report = TickReport::default();

        let Self {
            animator, batches, ..
        } = self;

        for record in batches.values_mut() {
            let line = record.trigger.line(viewport.height);
            let mut rank = 0;

            for tracked in record.targets.iter_mut() {
                if tracked.settle(now) {
                    report.completed += 1;
                }

                if !tracked.is_consistent() {
                    tracing::warn!(
                        "Reveal target {} is {:?} with in-flight {:?}, resetting",
                        tracked.target.id,
                        tracked.state,
                        tracked.in_flight.map(|f| f.handle)
                    );
                    if let Some(flight) = tracked.in_flight.take() {
                        animator.cancel(flight.handle);
                    }
                    tracked.state = RevealState::Unseen;
                    animator.place(&tracked.target.id, Pose::hidden(&tracked.target.profile));
                    report.reset += 1;
                }

                let Some(bounds) = observer
                    .measure(&tracked.target.id)
                    .filter(|bounds| bounds.is_measurable())
                else {
                    report.skipped += 1;
                    continue;
                };

                let crossed = bounds.top() <= line;
                match (tracked.state, crossed) {
                    (RevealState::Unseen | RevealState::Hidden, true) => {
                        let delay = policy.delay(record.stagger_step, tracked.target.index, rank);
                        rank += 1;
                        if start(animator, tracked, Direction::Enter, delay, now) {
                            report.entered += 1;
                        }
                    }
                    (RevealState::Visible, false) => {
                        if start(animator, tracked, Direction::Exit, Duration::ZERO, now) {
                            report.exited += 1;
                        }
                    }
                    (RevealState::Entering, false) | (RevealState::Exiting, true) => {
                        if let Some(flight) = tracked.in_flight.take() {
                            animator.cancel(flight.handle);
                        }
                        let direction = if crossed {
                            Direction::Enter
                        } else {
                            Direction::Exit
                        };
                        if start(animator, tracked, direction, Duration::ZERO, now) {
                            report.reversed += 1;
                        }
                    }
                    _ => {}
                }
            }
        }

        if !report.is_quiet() {
            tracing::debug!("Reveal tick: {:?}", report);
        }
        report
    }

    /// Current state of a target, if registered
    pub fn state(&self, id: &TargetId) -> Option<RevealState> {
        self.batches
            .values()
            .flat_map(|record| record.targets.iter())
            .find(|tracked| &tracked.target.id == id)
            .map(|tracked| tracked.state)
    }

    #[allow(dead_code)]
    pub fn is_registered(&self, handle: RegistrationHandle) -> bool {
        self.batches.contains_key(&handle)
    }

    pub fn target_count(&self) -> usize {
        self.batches.values().map(|record| record.targets.len()).sum()
    }

    /// Some animation has not settled yet
    pub fn has_pending_work(&self) -> bool {
        self.batches
            .values()
            .flat_map(|record| record.targets.iter())
            .any(|tracked| tracked.in_flight.is_some())
    }

    /// Drop the given identifiers from every batch, cancelling their animations
    fn evict(&mut self, ids: &HashSet<TargetId>) {
        let Self {
            animator, batches, ..
        } = self;

        batches.retain(|handle, record| {
            let before = record.targets.len();
            record.targets.retain(|tracked| {
                if !ids.contains(&tracked.target.id) {
                    return true;
                }
                if let Some(flight) = tracked.in_flight {
                    animator.cancel(flight.handle);
                }
                false
            });

            if record.targets.len() != before {
                tracing::debug!(
                    "Reveal batch {} lost {} targets to a new registration",
                    handle.0,
                    before - record.targets.len()
                );
            }
            !record.targets.is_empty()
        });
    }
}

/// Issue the single command for a transition
fn start<A: Animator>(
    animator: &mut A,
    tracked: &mut Tracked,
    direction: Direction,
    delay: Duration,
    now: Instant,
) -> bool {
    let next = match direction {
        Direction::Enter => RevealState::Entering,
        Direction::Exit => RevealState::Exiting,
    };
    if !tracked.advance(next) {
        return false;
    }

    let id = tracked.target.id.clone();
    let command = match direction {
        Direction::Enter => AnimationCommand::enter(id, &tracked.target.profile, delay),
        Direction::Exit => AnimationCommand::exit(id, &tracked.target.profile),
    };
    let settles_at = now.checked_add(command.settles_after());
    let handle = animator.animate(command, now);

    tracked.in_flight = Some(InFlight {
        handle,
        direction,
        settles_at,
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reveal::testing::{FakeObserver, RecordingAnimator};
    use crate::features::reveal::types::{AnimationProfile, Bounds};

    const VIEWPORT_HEIGHT: f32 = 800.0;
    // Default trigger: 100px above the bottom edge
    const IN_VIEW: f32 = 650.0;
    const OUT_OF_VIEW: f32 = 750.0;

    fn controller() -> RevealController<RecordingAnimator> {
        RevealController::new(RecordingAnimator::default(), ControllerConfig::default())
    }

    fn batch(ids: &[&str], step_ms: u64) -> RevealBatch {
        RevealBatch::uniform(
            ids.iter().copied(),
            AnimationProfile::default(),
            Duration::from_millis(step_ms),
        )
    }

    fn observer() -> FakeObserver {
        FakeObserver::new(1200.0, VIEWPORT_HEIGHT)
    }

    fn state(controller: &RevealController<RecordingAnimator>, id: &str) -> RevealState {
        controller
            .state(&TargetId::new(id))
            .expect("target should be registered")
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_stagger_delays_follow_batch_order() {
        let mut controller = controller();
        let ids = ["a", "b", "c", "d", "e"];
        controller
            .register(batch(&ids, 200), TriggerOffset::default())
            .unwrap();

        let mut observer = observer();
        for (i, id) in ids.iter().enumerate() {
            observer.set_top(id, 100.0 + i as f32 * 50.0);
        }

        let report = controller.tick(&observer, Instant::now());
        assert_eq!(report.entered, 5);

        let delays: Vec<u128> = controller
            .animator()
            .commands
            .iter()
            .map(|(_, c)| c.delay.as_millis())
            .collect();
        assert_eq!(delays, vec![0, 200, 400, 600, 800]);
    }

    #[test]
    fn test_end_to_end_scroll_scenario() {
        let mut controller = controller();
        controller
            .register(batch(&["p0", "p1", "p2"], 150), TriggerOffset::Pixels(100.0))
            .unwrap();

        let mut observer = observer();
        observer.set_top("p0", IN_VIEW);
        observer.set_top("p1", IN_VIEW - 20.0);
        observer.set_top("p2", 1400.0);

        let t0 = Instant::now();
        controller.tick(&observer, t0);

        assert_eq!(state(&controller, "p0"), RevealState::Entering);
        assert_eq!(state(&controller, "p1"), RevealState::Entering);
        assert_eq!(state(&controller, "p2"), RevealState::Unseen);

        let p0 = controller.animator().commands_for("p0");
        assert_eq!(p0.len(), 1);
        assert_eq!(p0[0].direction, Direction::Enter);
        assert_eq!(p0[0].opacity, (0.0, 1.0));
        assert_eq!(p0[0].translate_y, (50.0, 0.0));
        assert_eq!(p0[0].delay, Duration::ZERO);

        let p1 = controller.animator().commands_for("p1");
        assert_eq!(p1.len(), 1);
        assert_eq!(p1[0].delay, ms(150));

        // p0 settles after its 800ms animation
        let t1 = t0 + ms(900);
        controller.tick(&observer, t1);
        assert_eq!(state(&controller, "p0"), RevealState::Visible);

        // Scroll p0 back below the trigger line
        observer.set_top("p0", OUT_OF_VIEW);
        controller.tick(&observer, t1 + ms(16));
        assert_eq!(state(&controller, "p0"), RevealState::Exiting);

        let p0 = controller.animator().commands_for("p0");
        assert_eq!(p0.len(), 2);
        assert_eq!(p0[1].direction, Direction::Exit);
        assert_eq!(p0[1].opacity, (1.0, 0.0));
        assert_eq!(p0[1].translate_y, (0.0, 50.0));
        assert_eq!(p0[1].delay, Duration::ZERO);
    }

    #[test]
    fn test_deregister_cancels_and_silences_targets() {
        let mut controller = controller();
        let handle = controller
            .register(batch(&["a", "b"], 100), TriggerOffset::default())
            .unwrap();

        let mut observer = observer();
        observer.set_top("a", IN_VIEW);
        observer.set_top("b", IN_VIEW);
        let t0 = Instant::now();
        controller.tick(&observer, t0);

        let issued: Vec<AnimationHandle> = controller
            .animator()
            .commands
            .iter()
            .map(|(h, _)| *h)
            .collect();
        assert_eq!(issued.len(), 2);

        assert!(controller.deregister(handle));
        assert_eq!(controller.animator().cancelled, issued);
        assert_eq!(controller.animator().released.len(), 2);
        assert!(controller.state(&TargetId::new("a")).is_none());

        // Later ticks never mention the removed targets
        observer.set_top("a", OUT_OF_VIEW);
        controller.tick(&observer, t0 + ms(100));
        observer.set_top("a", IN_VIEW);
        controller.tick(&observer, t0 + ms(2000));
        assert_eq!(controller.animator().commands.len(), 2);
    }

    #[test]
    fn test_double_deregister_is_noop() {
        let mut controller = controller();
        let handle = controller
            .register(batch(&["a"], 100), TriggerOffset::default())
            .unwrap();

        let mut observer = observer();
        observer.set_top("a", IN_VIEW);
        controller.tick(&observer, Instant::now());

        assert!(controller.deregister(handle));
        let cancelled = controller.animator().cancelled.len();
        let released = controller.animator().released.len();

        assert!(!controller.deregister(handle));
        assert_eq!(controller.animator().cancelled.len(), cancelled);
        assert_eq!(controller.animator().released.len(), released);
        assert!(!controller.is_registered(handle));
    }

    #[test]
    fn test_invalid_registrations_register_nothing() {
        let mut controller = controller();

        let empty = RevealBatch::new(ms(100));
        assert_eq!(
            controller.register(empty, TriggerOffset::default()),
            Err(RegistrationError::EmptyBatch)
        );

        let duplicated = batch(&["a", "b", "a"], 100);
        assert_eq!(
            controller.register(duplicated, TriggerOffset::default()),
            Err(RegistrationError::DuplicateTarget(TargetId::new("a")))
        );

        assert_eq!(controller.target_count(), 0);
        assert!(controller.animator().placed.is_empty());
    }

    #[test]
    fn test_rapid_recrossing_within_one_tick_issues_one_command() {
        let mut controller = controller();
        controller
            .register(batch(&["a"], 100), TriggerOffset::default())
            .unwrap();

        let mut observer = observer();
        let t0 = Instant::now();

        // Enter, exit, enter between two ticks
        observer.set_top("a", IN_VIEW);
        observer.set_top("a", OUT_OF_VIEW);
        observer.set_top("a", IN_VIEW);
        controller.tick(&observer, t0);

        let commands = controller.animator().commands_for("a");
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].direction, Direction::Enter);

        // Once visible: exit then re-enter between ticks nets out to nothing
        controller.tick(&observer, t0 + ms(1000));
        assert_eq!(state(&controller, "a"), RevealState::Visible);
        observer.set_top("a", OUT_OF_VIEW);
        observer.set_top("a", IN_VIEW);
        controller.tick(&observer, t0 + ms(1016));

        assert_eq!(controller.animator().commands_for("a").len(), 1);
        assert!(controller.animator().cancelled.is_empty());
    }

    #[test]
    fn test_reversal_mid_animation_cancels_in_flight_command() {
        let mut controller = controller();
        controller
            .register(batch(&["a"], 100), TriggerOffset::default())
            .unwrap();

        let mut observer = observer();
        observer.set_top("a", IN_VIEW);
        let t0 = Instant::now();
        controller.tick(&observer, t0);
        let (enter_handle, _) = controller.animator().commands[0].clone();

        observer.set_top("a", OUT_OF_VIEW);
        let report = controller.tick(&observer, t0 + ms(200));
        assert_eq!(report.reversed, 1);
        assert_eq!(state(&controller, "a"), RevealState::Exiting);
        assert_eq!(controller.animator().cancelled, vec![enter_handle]);

        let commands = controller.animator().commands_for("a");
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[1].direction, Direction::Exit);
        assert_eq!(commands[1].delay, Duration::ZERO);

        // And straight back again, without the stagger slot
        observer.set_top("a", IN_VIEW);
        controller.tick(&observer, t0 + ms(300));
        assert_eq!(state(&controller, "a"), RevealState::Entering);
        let commands = controller.animator().commands_for("a");
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[2].delay, Duration::ZERO);
        assert_eq!(controller.animator().cancelled.len(), 2);
    }

    #[test]
    fn test_no_duplicate_commands_while_in_flight() {
        let mut controller = controller();
        controller
            .register(batch(&["a"], 100), TriggerOffset::default())
            .unwrap();

        let mut observer = observer();
        observer.set_top("a", IN_VIEW);
        let t0 = Instant::now();
        for frame in 0..10 {
            controller.tick(&observer, t0 + ms(frame * 16));
        }

        assert_eq!(controller.animator().commands.len(), 1);
        assert!(controller.has_pending_work());
    }

    #[test]
    fn test_scrolling_past_does_not_hide() {
        let mut controller = controller();
        controller
            .register(batch(&["a"], 100), TriggerOffset::default())
            .unwrap();

        let mut observer = observer();
        observer.set_top("a", IN_VIEW);
        let t0 = Instant::now();
        controller.tick(&observer, t0);
        controller.tick(&observer, t0 + ms(900));

        // Element leaves through the top of the viewport
        observer.set_top("a", -600.0);
        let report = controller.tick(&observer, t0 + ms(1000));

        assert_eq!(report.commands(), 0);
        assert_eq!(state(&controller, "a"), RevealState::Visible);
        assert!(!controller.has_pending_work());
    }

    #[test]
    fn test_unmeasurable_targets_are_skipped_and_retried() {
        let mut controller = controller();
        controller
            .register(batch(&["a", "b"], 100), TriggerOffset::default())
            .unwrap();

        let mut observer = observer();
        observer.set_top("b", IN_VIEW);
        observer
            .boxes
            .insert(TargetId::new("a"), Bounds::new(0.0, IN_VIEW, 0.0, 0.0));

        let t0 = Instant::now();
        let report = controller.tick(&observer, t0);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.entered, 1);
        assert_eq!(state(&controller, "a"), RevealState::Unseen);

        // Detached entirely: still just skipped
        observer.detach("a");
        let report = controller.tick(&observer, t0 + ms(16));
        assert_eq!(report.skipped, 1);

        // Laid out on a later tick: picked up with its own stagger slot
        observer.set_top("a", IN_VIEW);
        controller.tick(&observer, t0 + ms(32));
        assert_eq!(state(&controller, "a"), RevealState::Entering);
        assert_eq!(controller.animator().commands_for("a")[0].delay, Duration::ZERO);
    }

    #[test]
    fn test_reregistering_same_ids_replaces_batch() {
        let mut controller = controller();
        let first = controller
            .register(batch(&["a", "b"], 100), TriggerOffset::default())
            .unwrap();

        let mut observer = observer();
        observer.set_top("a", IN_VIEW);
        controller.tick(&observer, Instant::now());
        let (in_flight, _) = controller.animator().commands[0].clone();

        let second = controller
            .register(batch(&["a", "b"], 300), TriggerOffset::default())
            .unwrap();

        assert_ne!(first, second);
        assert!(!controller.is_registered(first));
        assert!(controller.is_registered(second));
        assert_eq!(controller.target_count(), 2);
        assert_eq!(controller.animator().cancelled, vec![in_flight]);
        assert_eq!(state(&controller, "a"), RevealState::Unseen);

        // The stale handle is now a no-op
        assert!(!controller.deregister(first));
        assert_eq!(controller.target_count(), 2);
    }

    #[test]
    fn test_partial_overlap_moves_targets() {
        let mut controller = controller();
        let first = controller
            .register(batch(&["a", "b"], 100), TriggerOffset::default())
            .unwrap();
        controller
            .register(batch(&["b", "c"], 100), TriggerOffset::default())
            .unwrap();

        assert!(controller.is_registered(first));
        assert_eq!(controller.target_count(), 3);
    }

    #[test]
    fn test_transitions_follow_the_cycle() {
        let mut controller = controller();
        controller
            .register(batch(&["a"], 100), TriggerOffset::default())
            .unwrap();

        let mut observer = observer();
        let t0 = Instant::now();
        let mut history = vec![state(&controller, "a")];

        // In, out and back in with mixed timing: some settle, some reverse
        let script: [(f32, u64); 10] = [
            (IN_VIEW, 0),
            (IN_VIEW, 900),
            (OUT_OF_VIEW, 950),
            (OUT_OF_VIEW, 1900),
            (IN_VIEW, 2000),
            (OUT_OF_VIEW, 2100),
            (IN_VIEW, 2200),
            (IN_VIEW, 3100),
            (OUT_OF_VIEW, 3200),
            (OUT_OF_VIEW, 4100),
        ];
        for (top, at) in script {
            observer.set_top("a", top);
            controller.tick(&observer, t0 + ms(at));
            history.push(state(&controller, "a"));
        }

        for pair in history.windows(2) {
            assert!(
                pair[0] == pair[1] || pair[0].can_advance_to(pair[1]),
                "illegal transition {:?} -> {:?} in {:?}",
                pair[0],
                pair[1],
                history
            );
        }
        assert_eq!(history.last(), Some(&RevealState::Hidden));
    }

    #[test]
    fn test_hidden_target_reenters_with_stagger() {
        let mut controller = controller();
        controller
            .register(batch(&["a", "b"], 250), TriggerOffset::default())
            .unwrap();

        let mut observer = observer();
        observer.set_top("b", IN_VIEW);
        let t0 = Instant::now();
        controller.tick(&observer, t0);
        controller.tick(&observer, t0 + ms(1100));
        observer.set_top("b", OUT_OF_VIEW);
        controller.tick(&observer, t0 + ms(1200));
        controller.tick(&observer, t0 + ms(2100));
        assert_eq!(state(&controller, "b"), RevealState::Hidden);

        observer.set_top("b", IN_VIEW);
        controller.tick(&observer, t0 + ms(2200));
        let commands = controller.animator().commands_for("b");
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[2].delay, ms(250));
    }

    #[test]
    fn test_within_tick_policy_ranks_entering_targets() {
        let mut controller = RevealController::new(
            RecordingAnimator::default(),
            ControllerConfig {
                stagger_policy: StaggerPolicy::WithinTick,
                ..Default::default()
            },
        );
        controller
            .register(batch(&["a", "b", "c", "d"], 100), TriggerOffset::default())
            .unwrap();

        let mut observer = observer();
        observer.set_top("c", IN_VIEW);
        observer.set_top("d", IN_VIEW);
        controller.tick(&observer, Instant::now());

        assert_eq!(controller.animator().commands_for("c")[0].delay, Duration::ZERO);
        assert_eq!(controller.animator().commands_for("d")[0].delay, ms(100));
    }

    #[test]
    fn test_percent_trigger() {
        let mut controller = controller();
        controller
            .register(batch(&["a"], 100), TriggerOffset::Percent(50.0))
            .unwrap();

        let mut observer = observer();
        observer.set_top("a", 500.0);
        controller.tick(&observer, Instant::now());
        assert_eq!(state(&controller, "a"), RevealState::Unseen);

        observer.set_top("a", 400.0);
        controller.tick(&observer, Instant::now());
        assert_eq!(state(&controller, "a"), RevealState::Entering);
    }

    #[test]
    fn test_register_default_uses_configured_trigger() {
        let mut controller = RevealController::new(
            RecordingAnimator::default(),
            ControllerConfig {
                default_trigger: TriggerOffset::Percent(50.0),
                ..Default::default()
            },
        );
        controller.register_default(batch(&["a"], 100)).unwrap();

        // 100px default would already fire at 650; half the viewport does not
        let mut observer = observer();
        observer.set_top("a", IN_VIEW);
        controller.tick(&observer, Instant::now());
        assert_eq!(state(&controller, "a"), RevealState::Unseen);

        observer.set_top("a", 350.0);
        controller.tick(&observer, Instant::now());
        assert_eq!(state(&controller, "a"), RevealState::Entering);
    }

    #[test]
    fn test_extend_respects_mutation_flag() {
        let mut controller = controller();
        let handle = controller
            .register(batch(&["a", "b", "c"], 100), TriggerOffset::default())
            .unwrap();

        let late = RevealTarget::new("d", AnimationProfile::default());
        assert_eq!(controller.extend(handle, [late.clone()]), Ok(0));
        assert!(controller.state(&TargetId::new("d")).is_none());

        controller.set_config(ControllerConfig {
            auto_observe_mutations: true,
            ..Default::default()
        });
        assert_eq!(controller.extend(handle, [late]), Ok(1));
        assert_eq!(state(&controller, "d"), RevealState::Unseen);

        let mut observer = observer();
        observer.set_top("d", IN_VIEW);
        controller.tick(&observer, Instant::now());
        assert_eq!(controller.animator().commands_for("d")[0].delay, ms(300));

        let duplicate = RevealTarget::new("a", AnimationProfile::default());
        assert_eq!(
            controller.extend(handle, [duplicate]),
            Err(RegistrationError::DuplicateTarget(TargetId::new("a")))
        );

        controller.deregister(handle);
        assert_eq!(
            controller.extend(handle, Vec::new()),
            Err(RegistrationError::UnknownHandle(handle))
        );
    }

    #[test]
    fn test_inconsistent_target_is_reset() {
        let mut controller = controller();
        let handle = controller
            .register(batch(&["a"], 100), TriggerOffset::default())
            .unwrap();

        // Entering with nothing in flight cannot happen through the public API
        if let Some(record) = controller.batches.get_mut(&handle) {
            record.targets[0].state = RevealState::Entering;
        }

        let observer = observer();
        let report = controller.tick(&observer, Instant::now());
        assert_eq!(report.reset, 1);
        assert_eq!(state(&controller, "a"), RevealState::Unseen);
        assert!(controller.animator().commands.is_empty());
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut controller = controller();
        controller
            .register(batch(&["a"], 100), TriggerOffset::default())
            .unwrap();
        controller
            .register(batch(&["b"], 100), TriggerOffset::default())
            .unwrap();

        controller.clear();
        assert_eq!(controller.target_count(), 0);
        assert_eq!(controller.animator().released.len(), 2);
    }
}
