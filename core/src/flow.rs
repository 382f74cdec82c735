//! Navigation State Machine
//!
//! `FlowController` owns the catalog, the answer record, the resolved
//! sequence and the cursor, and performs every transition. Blocked
//! transitions return an explicit [`Nav::Blocked`] value rather than
//! panicking or erroring: the UI treats a block as a no-op (a disabled
//! control), while tests can assert on the reason.

use crate::answers::AnswerRecord;
use crate::catalog::Catalog;
use crate::field::{Answer, FieldKind};
use crate::resolve::{ResolvedSequence, resolve};
use crate::snapshot::Snapshot;
use crate::step::Step;

/// Navigation cursor: the displayed index and the furthest index the
/// user has validly reached. The high-water mark gates backward
/// jump-navigation without permitting skipping ahead, and is clamped
/// down whenever the sequence shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub current: usize,
    pub high_water_mark: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
}

/// A completed transition, the animation collaborator's entire input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTransition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    /// The sequence was rebuilt (branch change); positional semantics of
    /// the old sequence no longer apply.
    pub structural: bool,
    /// Structural moves and snapshot restores render without animation.
    pub animated: bool,
}

/// Why a transition did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockedReason {
    /// The current step's validation gate does not pass.
    StepInvalid,
    /// Already at the first step.
    AtStart,
    /// The terminal step is absorbing; only restart leaves it.
    TerminalReached,
    /// Target index was never validly reached.
    BeyondHighWater,
    /// Target index is the current step.
    AlreadyThere,
    /// Target index is outside the resolved sequence.
    OutOfRange,
}

/// Result of a navigation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Moved(StepTransition),
    Blocked(BlockedReason),
}

impl Nav {
    pub fn moved(&self) -> bool {
        matches!(self, Nav::Moved(_))
    }
}

/// The one controller instance owning all flow state. Collaborators
/// receive it by reference; there is no ambient state.
#[derive(Debug, Clone)]
pub struct FlowController {
    catalog: Catalog,
    answers: AnswerRecord,
    sequence: ResolvedSequence,
    cursor: Cursor,
}

impl FlowController {
    pub fn new(catalog: Catalog) -> Self {
        let answers = AnswerRecord::new();
        let sequence = resolve(&catalog, &answers);
        Self {
            catalog,
            answers,
            sequence,
            cursor: Cursor {
                current: 0,
                high_water_mark: 0,
            },
        }
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn sequence(&self) -> &ResolvedSequence {
        &self.sequence
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn current_step(&self) -> &Step {
        // The cursor invariant keeps `current` inside the sequence.
        self.sequence
            .get(self.cursor.current)
            .unwrap_or_else(|| unreachable!("cursor outside resolved sequence"))
    }

    /// Whether the flow has reached its terminal step.
    pub fn is_finished(&self) -> bool {
        self.current_step().is_terminal()
    }

    /// Validation gate for the displayed step.
    pub fn current_is_valid(&self) -> bool {
        self.current_step().is_valid(&self.answers)
    }

    /// Record an answer. Changing the discriminator clamps the
    /// high-water mark to the current index so steps of the abandoned
    /// branch are no longer reachable by jump navigation.
    pub fn set_answer(&mut self, key: impl Into<String>, value: impl Into<Answer>) {
        let key = key.into();
        let is_discriminator = key == self.catalog.discriminator();
        self.answers.set(key, value);
        if is_discriminator {
            self.cursor.high_water_mark = self.cursor.high_water_mark.min(self.cursor.current);
        }
    }

    /// Edit one slot of a multi-text field on the current step. Grows
    /// the stored list as needed and appends a single trailing empty
    /// slot once the last slot holds text, never exceeding the field's
    /// declared maximum.
    pub fn edit_list_entry(&mut self, key: &str, index: usize, text: impl Into<String>) {
        let Some(field) = self.current_step().field(key) else {
            return;
        };
        let &FieldKind::MultiText { max_entries } = &field.kind else {
            return;
        };
        if index >= max_entries {
            return;
        }

        let items = self.answers.list_mut(key);
        while items.len() <= index {
            items.push(String::new());
        }
        items[index] = text.into();

        let last_filled = items.last().is_some_and(|v| !v.trim().is_empty());
        if last_filled && items.len() < max_entries {
            items.push(String::new());
        }
    }

    /// Move forward one step. Re-resolves the sequence first: the
    /// discriminator may have just changed, in which case the move is
    /// structural and rendered without animation.
    pub fn advance(&mut self) -> Nav {
        if self.current_step().is_terminal() {
            return Nav::Blocked(BlockedReason::TerminalReached);
        }
        if !self.current_is_valid() {
            return Nav::Blocked(BlockedReason::StepInvalid);
        }

        let next = resolve(&self.catalog, &self.answers);
        let structural = !self.sequence.same_shape(&next);
        if structural {
            self.sequence = next;
            self.cursor.high_water_mark =
                self.cursor.high_water_mark.min(self.sequence.last_index());
            self.cursor.current = self.cursor.current.min(self.sequence.last_index());
        }

        let from = self.cursor.current;
        let to = from + 1;
        let Some(target) = self.sequence.get(to) else {
            return Nav::Blocked(BlockedReason::OutOfRange);
        };

        let terminal = target.is_terminal();
        self.cursor.current = to;
        if to > self.cursor.high_water_mark && !terminal {
            self.cursor.high_water_mark = to;
        }

        Nav::Moved(StepTransition {
            from,
            to,
            direction: Direction::Forward,
            structural,
            animated: !structural,
        })
    }

    /// Move back one step, skipping any step whose condition no longer
    /// holds against the current answers.
    pub fn retreat(&mut self) -> Nav {
        if self.current_step().is_terminal() {
            return Nav::Blocked(BlockedReason::TerminalReached);
        }
        if self.cursor.current == 0 {
            return Nav::Blocked(BlockedReason::AtStart);
        }

        let from = self.cursor.current;
        let mut target = from;
        loop {
            if target == 0 {
                return Nav::Blocked(BlockedReason::AtStart);
            }
            target -= 1;
            let applies = self
                .sequence
                .get(target)
                .is_some_and(|s| s.applies(&self.answers));
            if applies {
                break;
            }
        }

        self.cursor.current = target;
        Nav::Moved(StepTransition {
            from,
            to: target,
            direction: Direction::Back,
            structural: false,
            animated: true,
        })
    }

    /// Revisit the next already-reached step ahead of the cursor,
    /// skipping steps whose condition no longer holds.
    pub fn forward(&mut self) -> Nav {
        if self.current_step().is_terminal() {
            return Nav::Blocked(BlockedReason::TerminalReached);
        }

        let from = self.cursor.current;
        let mut target = from + 1;
        while target <= self.cursor.high_water_mark {
            let applies = self
                .sequence
                .get(target)
                .is_some_and(|s| s.applies(&self.answers));
            if applies {
                self.cursor.current = target;
                return Nav::Moved(StepTransition {
                    from,
                    to: target,
                    direction: Direction::Forward,
                    structural: false,
                    animated: true,
                });
            }
            target += 1;
        }

        Nav::Blocked(BlockedReason::BeyondHighWater)
    }

    /// Direct step-indicator selection. Permitted only within the
    /// high-water mark; never advances it.
    pub fn jump_to(&mut self, index: usize) -> Nav {
        if self.current_step().is_terminal() {
            return Nav::Blocked(BlockedReason::TerminalReached);
        }
        if index == self.cursor.current {
            return Nav::Blocked(BlockedReason::AlreadyThere);
        }
        if index >= self.sequence.len() {
            return Nav::Blocked(BlockedReason::OutOfRange);
        }
        if index > self.cursor.high_water_mark {
            return Nav::Blocked(BlockedReason::BeyondHighWater);
        }

        let from = self.cursor.current;
        let direction = if index > from {
            Direction::Forward
        } else {
            Direction::Back
        };
        self.cursor.current = index;

        Nav::Moved(StepTransition {
            from,
            to: index,
            direction,
            structural: false,
            animated: true,
        })
    }

    /// Discard everything: answers, cursor, resolved sequence.
    pub fn restart(&mut self) {
        self.answers.clear();
        self.sequence = resolve(&self.catalog, &self.answers);
        self.cursor = Cursor {
            current: 0,
            high_water_mark: 0,
        };
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            answers: self.answers.clone(),
            current: self.cursor.current,
            high_water_mark: self.cursor.high_water_mark,
        }
    }

    /// Restore a persisted snapshot: answers and high-water mark are
    /// taken as saved, the sequence is re-resolved against the restored
    /// answers, and both cursor components are clamped into it.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.answers = snapshot.answers;
        self.sequence = resolve(&self.catalog, &self.answers);
        let last = self.sequence.last_index();
        self.cursor = Cursor {
            current: snapshot.current.min(last),
            high_water_mark: snapshot.high_water_mark.min(last),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    fn catalog() -> Catalog {
        Catalog::new("role")
            .prefix_step(Step::intro("intro").with_button("Let's connect"))
            .prefix_step(Step::content(
                "identity",
                "About you",
                vec![Field::text("name"), Field::text("phone").optional()],
            ))
            .prefix_step(Step::content(
                "role",
                "Pick a role",
                vec![Field::choice("role", &["builder", "researcher"])],
            ))
            .branch(
                "builder",
                vec![Step::content("b1", "Stack?", vec![Field::text("stack")])],
            )
            .branch(
                "researcher",
                vec![
                    Step::content("r1", "Focus?", vec![Field::text("focus")]),
                    Step::content(
                        "r2",
                        "Papers?",
                        vec![Field::multi_text("papers", 3)],
                    ),
                ],
            )
            .suffix_step(Step::content(
                "notes",
                "Anything else?",
                vec![Field::text_area("notes").optional()],
            ))
            .suffix_step(Step::terminal("thankyou"))
    }

    fn controller() -> FlowController {
        FlowController::new(catalog())
    }

    /// Drive the controller to the step with the given id, filling
    /// required fields with placeholder answers along the way.
    fn drive_to(ctl: &mut FlowController, id: &str) {
        while ctl.current_step().id != id {
            for field in ctl.current_step().fields().to_vec() {
                if !field.required {
                    continue;
                }
                match field.kind {
                    FieldKind::Choice { ref options } | FieldKind::MultiChoice { ref options } => {
                        if matches!(field.kind, FieldKind::Choice { .. }) {
                            ctl.set_answer(field.key.clone(), options[0].clone());
                        } else {
                            ctl.set_answer(field.key.clone(), Answer::list([options[0].clone()]));
                        }
                    }
                    FieldKind::MultiText { .. } => {
                        ctl.set_answer(field.key.clone(), Answer::list(["https://example.com"]));
                    }
                    _ => ctl.set_answer(field.key.clone(), "filled"),
                }
            }
            assert!(ctl.advance().moved(), "stuck at {}", ctl.current_step().id);
        }
    }

    #[test]
    fn test_intro_advances_without_answers() {
        let mut ctl = controller();
        assert!(ctl.current_is_valid());
        let nav = ctl.advance();
        assert!(nav.moved());
        assert_eq!(ctl.current_step().id, "identity");
    }

    #[test]
    fn test_advance_blocked_until_required_fields_filled() {
        let mut ctl = controller();
        ctl.advance();
        assert_eq!(ctl.advance(), Nav::Blocked(BlockedReason::StepInvalid));

        ctl.set_answer("name", "   ");
        assert_eq!(ctl.advance(), Nav::Blocked(BlockedReason::StepInvalid));

        ctl.set_answer("name", "Jane");
        assert!(ctl.advance().moved());
        assert_eq!(ctl.current_step().id, "role");
    }

    #[test]
    fn test_role_selection_makes_advance_structural() {
        let mut ctl = controller();
        drive_to(&mut ctl, "role");
        ctl.set_answer("role", "researcher");

        let nav = ctl.advance();
        let Nav::Moved(transition) = nav else {
            panic!("advance blocked");
        };
        assert!(transition.structural);
        assert!(!transition.animated);
        assert_eq!(ctl.current_step().id, "r1");
    }

    #[test]
    fn test_unchanged_sequence_advances_in_place() {
        let mut ctl = controller();
        let Nav::Moved(transition) = ctl.advance() else {
            panic!("advance blocked");
        };
        assert!(!transition.structural);
        assert!(transition.animated);
        assert_eq!(transition.direction, Direction::Forward);
    }

    #[test]
    fn test_role_change_clamps_high_water_mark() {
        let mut ctl = controller();
        drive_to(&mut ctl, "role");
        ctl.set_answer("role", "researcher");
        ctl.advance();
        ctl.set_answer("focus", "emergence");
        ctl.advance();
        ctl.set_answer("papers", Answer::list(["https://a"]));
        ctl.advance();
        assert_eq!(ctl.current_step().id, "notes");

        let role_index = 2;
        assert!(ctl.cursor().high_water_mark >= 4);

        assert!(ctl.jump_to(role_index).moved());
        ctl.set_answer("role", "builder");
        assert_eq!(ctl.cursor().high_water_mark, role_index);

        // Builder branch is shorter; the invariant must hold after the
        // structural re-resolve too.
        assert!(ctl.advance().moved());
        assert!(ctl.cursor().high_water_mark <= ctl.sequence().last_index());
        assert_eq!(ctl.current_step().id, "b1");
    }

    #[test]
    fn test_high_water_mark_never_exceeds_sequence() {
        let mut ctl = controller();
        drive_to(&mut ctl, "notes");
        assert!(ctl.cursor().high_water_mark <= ctl.sequence().last_index());

        // Bounce between branches a few times.
        ctl.jump_to(2).unwrap_moved();
        ctl.set_answer("role", "researcher");
        ctl.advance();
        ctl.retreat();
        ctl.set_answer("role", "builder");
        ctl.advance();
        assert!(ctl.cursor().high_water_mark <= ctl.sequence().last_index());
    }

    #[test]
    fn test_jump_beyond_high_water_is_blocked_and_state_unchanged() {
        let mut ctl = controller();
        ctl.advance();
        let before = ctl.cursor();

        assert_eq!(ctl.jump_to(4), Nav::Blocked(BlockedReason::BeyondHighWater));
        assert_eq!(ctl.cursor(), before);
    }

    #[test]
    fn test_jump_to_current_and_out_of_range_blocked() {
        let mut ctl = controller();
        ctl.advance();
        assert_eq!(ctl.jump_to(1), Nav::Blocked(BlockedReason::AlreadyThere));
        assert_eq!(ctl.jump_to(99), Nav::Blocked(BlockedReason::OutOfRange));
    }

    #[test]
    fn test_jump_back_does_not_lower_high_water_mark() {
        let mut ctl = controller();
        drive_to(&mut ctl, "role");
        let hwm = ctl.cursor().high_water_mark;

        assert!(ctl.jump_to(1).moved());
        assert_eq!(ctl.cursor().high_water_mark, hwm);

        // And forward within the mark is allowed again.
        assert!(ctl.jump_to(2).moved());
    }

    #[test]
    fn test_forward_revisits_within_high_water_mark() {
        let mut ctl = controller();
        drive_to(&mut ctl, "role");
        ctl.retreat();
        ctl.retreat();
        assert_eq!(ctl.current_step().id, "intro");

        assert!(ctl.forward().moved());
        assert_eq!(ctl.current_step().id, "identity");
        assert!(ctl.forward().moved());
        assert_eq!(ctl.current_step().id, "role");

        // At the mark: nothing visited lies ahead.
        assert_eq!(ctl.forward(), Nav::Blocked(BlockedReason::BeyondHighWater));
    }

    #[test]
    fn test_retreat_at_start_blocked() {
        let mut ctl = controller();
        assert_eq!(ctl.retreat(), Nav::Blocked(BlockedReason::AtStart));
    }

    #[test]
    fn test_retreat_moves_back_with_animation() {
        let mut ctl = controller();
        ctl.advance();
        let Nav::Moved(transition) = ctl.retreat() else {
            panic!("retreat blocked");
        };
        assert_eq!(transition.direction, Direction::Back);
        assert!(transition.animated);
        assert_eq!(ctl.current_step().id, "intro");
    }

    #[test]
    fn test_terminal_is_absorbing() {
        let mut ctl = controller();
        drive_to(&mut ctl, "thankyou");
        assert!(ctl.is_finished());

        assert_eq!(ctl.advance(), Nav::Blocked(BlockedReason::TerminalReached));
        assert_eq!(ctl.retreat(), Nav::Blocked(BlockedReason::TerminalReached));
        assert_eq!(ctl.jump_to(0), Nav::Blocked(BlockedReason::TerminalReached));
    }

    #[test]
    fn test_terminal_arrival_does_not_raise_high_water_mark() {
        let mut ctl = controller();
        drive_to(&mut ctl, "thankyou");
        assert!(ctl.cursor().high_water_mark < ctl.sequence().last_index());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut ctl = controller();
        drive_to(&mut ctl, "thankyou");
        ctl.restart();

        assert_eq!(ctl.cursor(), Cursor { current: 0, high_water_mark: 0 });
        assert!(ctl.answers().is_empty());
        assert_eq!(ctl.current_step().id, "intro");
    }

    #[test]
    fn test_multi_text_slot_grows_and_caps_at_max() {
        let mut ctl = controller();
        drive_to(&mut ctl, "role");
        ctl.set_answer("role", "researcher");
        ctl.advance();
        ctl.set_answer("focus", "emergence");
        ctl.advance();
        assert_eq!(ctl.current_step().id, "r2");

        ctl.edit_list_entry("papers", 0, "https://a");
        assert_eq!(ctl.answers().list("papers").unwrap().len(), 2);

        ctl.edit_list_entry("papers", 1, "https://b");
        assert_eq!(ctl.answers().list("papers").unwrap().len(), 3);

        // Max reached: filling the last slot appends nothing further.
        ctl.edit_list_entry("papers", 2, "https://c");
        assert_eq!(ctl.answers().list("papers").unwrap().len(), 3);

        // Indices past the declared maximum are ignored.
        ctl.edit_list_entry("papers", 3, "https://d");
        assert_eq!(ctl.answers().list("papers").unwrap().len(), 3);
    }

    #[test]
    fn test_edit_list_entry_ignores_non_multi_text_keys() {
        let mut ctl = controller();
        ctl.advance();
        ctl.edit_list_entry("name", 0, "nope");
        assert_eq!(ctl.answers().get("name"), None);
    }

    #[test]
    fn test_restore_clamps_cursor_into_sequence() {
        let mut ctl = controller();
        let mut answers = AnswerRecord::new();
        answers.set("name", "Jane");

        ctl.restore(Snapshot {
            answers,
            current: 50,
            high_water_mark: 60,
        });

        assert_eq!(ctl.cursor().current, ctl.sequence().last_index());
        assert_eq!(ctl.cursor().high_water_mark, ctl.sequence().last_index());
        assert_eq!(ctl.answers().scalar("name"), Some("Jane"));
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut ctl = controller();
        drive_to(&mut ctl, "role");
        ctl.set_answer("role", "builder");
        let snapshot = ctl.snapshot();

        let mut restored = controller();
        restored.restore(snapshot.clone());
        assert_eq!(restored.snapshot(), snapshot);
        assert_eq!(restored.current_step().id, "role");
    }

    #[test]
    fn test_retreat_skips_steps_whose_condition_no_longer_holds() {
        let cat = Catalog::new("role")
            .prefix_step(Step::intro("intro"))
            .suffix_step(
                Step::content("extra", "Extra", vec![Field::text("extra").optional()])
                    .with_condition(|a| a.contains("wants_extra")),
            )
            .suffix_step(Step::content(
                "notes",
                "Notes",
                vec![Field::text_area("notes").optional()],
            ))
            .suffix_step(Step::terminal("done"));

        let mut ctl = FlowController::new(cat);
        ctl.set_answer("wants_extra", "yes");
        assert!(ctl.advance().moved());
        assert_eq!(ctl.current_step().id, "extra");
        assert!(ctl.advance().moved());
        assert_eq!(ctl.current_step().id, "notes");

        // The predicate flipped off; going back must skip "extra".
        ctl.answers.clear();
        let Nav::Moved(transition) = ctl.retreat() else {
            panic!("retreat blocked");
        };
        assert_eq!(transition.to, 0);
        assert_eq!(ctl.current_step().id, "intro");
    }

    impl Nav {
        fn unwrap_moved(self) {
            assert!(self.moved(), "expected a move, got {self:?}");
        }
    }
}
