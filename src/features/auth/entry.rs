//! Code entry state for the OTP modal. The state machine owns the slot buffer,
//! the active index, and the submission and cooldown state; every user event
//! returns follow-up commands (focus moves, scheduled submits, API calls) for
//! the rendering layer to execute. This keeps the entry rules out of view code
//! and runnable under native tests.

/// Delay between filling the last slot and the automatic verify, so the UI
/// paints the completed buffer before the inputs lock.
pub(crate) const AUTO_SUBMIT_DELAY_MS: u32 = 300;

/// Side effects requested by a state transition, executed by the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum EntryCommand {
    /// Move keyboard focus to the given slot.
    Focus(usize),
    /// Start the one-shot auto-submit timer.
    ScheduleAutoSubmit,
    /// Call the verification endpoint with the full code.
    Verify(String),
    /// Call the resend endpoint.
    SendCode,
}

/// One-time-code entry buffer with auto-advance, auto-submit, and a resend
/// cooldown. Slots hold at most one digit each.
#[derive(Clone, Debug)]
pub(crate) struct CodeEntry {
    slots: Vec<Option<char>>,
    active: usize,
    submitting: bool,
    cooldown_remaining: u32,
    auto_submit_armed: bool,
}

impl CodeEntry {
    pub(crate) fn new(length: usize) -> Self {
        Self {
            slots: vec![None; length.max(1)],
            active: 0,
            submitting: false,
            cooldown_remaining: 0,
            auto_submit_armed: false,
        }
    }

    pub(crate) fn length(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn active_slot(&self) -> usize {
        self.active
    }

    pub(crate) fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub(crate) fn can_submit(&self) -> bool {
        self.is_complete() && !self.submitting
    }

    pub(crate) fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }

    pub(crate) fn can_resend(&self) -> bool {
        self.cooldown_remaining == 0 && !self.submitting
    }

    /// Renders one slot for binding to its input element.
    pub(crate) fn slot_display(&self, index: usize) -> String {
        match self.slots.get(index).copied().flatten() {
            Some(digit) => digit.to_string(),
            None => String::new(),
        }
    }

    fn code(&self) -> String {
        self.slots.iter().filter_map(|slot| *slot).collect()
    }

    /// Applies a candidate value for one slot. A single digit is stored and
    /// advances focus; an empty value clears the slot; anything else leaves
    /// the buffer unchanged. Filling the last slot of a complete buffer arms
    /// the auto-submit timer once.
    pub(crate) fn input(&mut self, index: usize, raw: &str) -> Vec<EntryCommand> {
        if self.submitting || index >= self.slots.len() {
            return Vec::new();
        }

        let candidate = raw.trim();
        if candidate.is_empty() {
            self.slots[index] = None;
            self.active = index;
            self.auto_submit_armed = false;
            return Vec::new();
        }

        let mut chars = candidate.chars();
        let (Some(digit), None) = (chars.next(), chars.next()) else {
            return Vec::new();
        };
        if !digit.is_ascii_digit() {
            return Vec::new();
        }

        self.slots[index] = Some(digit);
        if index + 1 < self.slots.len() {
            self.active = index + 1;
            return vec![EntryCommand::Focus(self.active)];
        }

        self.active = index;
        if self.is_complete() && !self.auto_submit_armed {
            self.auto_submit_armed = true;
            return vec![EntryCommand::ScheduleAutoSubmit];
        }
        Vec::new()
    }

    /// Handles backspace in one slot. An empty slot moves focus back one cell;
    /// a filled slot returns no commands so the browser default clears it and
    /// the resulting empty input event updates the buffer.
    pub(crate) fn backspace(&mut self, index: usize) -> Vec<EntryCommand> {
        if self.submitting || index >= self.slots.len() {
            return Vec::new();
        }
        if self.slots[index].is_some() || index == 0 {
            return Vec::new();
        }

        self.active = index - 1;
        vec![EntryCommand::Focus(self.active)]
    }

    /// Starts verification when the buffer is complete and nothing is in
    /// flight. Both the auto-submit timer and the manual verify button land
    /// here, so a timer firing after a slot was cleared is a no-op.
    pub(crate) fn submit(&mut self) -> Vec<EntryCommand> {
        if !self.can_submit() {
            return Vec::new();
        }

        self.submitting = true;
        self.auto_submit_armed = false;
        vec![EntryCommand::Verify(self.code())]
    }

    /// Requests a fresh code. Only allowed once the cooldown has elapsed; the
    /// buffer is cleared and the cooldown restarts before the send resolves.
    pub(crate) fn request_resend(&mut self, cooldown_seconds: u32) -> Vec<EntryCommand> {
        if !self.can_resend() {
            return Vec::new();
        }

        for slot in &mut self.slots {
            *slot = None;
        }
        self.active = 0;
        self.auto_submit_armed = false;
        self.cooldown_remaining = cooldown_seconds;
        vec![EntryCommand::SendCode, EntryCommand::Focus(0)]
    }

    /// Advances the cooldown by one second, clamped at zero.
    pub(crate) fn tick(&mut self) {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
    }

    /// Returns the buffer to an editable state after a failed verification.
    /// Digits are kept so the user can correct them.
    pub(crate) fn verification_failed(&mut self) {
        self.submitting = false;
    }
}

/// Formats remaining cooldown seconds as `m:ss` for the resend label.
pub(crate) fn format_cooldown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::{format_cooldown, CodeEntry, EntryCommand};

    fn type_digits(entry: &mut CodeEntry, digits: &[&str]) -> Vec<EntryCommand> {
        let mut commands = Vec::new();
        for (index, digit) in digits.iter().enumerate() {
            commands.extend(entry.input(index, digit));
        }
        commands
    }

    #[test]
    fn accepted_digit_advances_active_slot() {
        let mut entry = CodeEntry::new(4);

        let commands = entry.input(0, "5");

        assert_eq!(commands, vec![EntryCommand::Focus(1)]);
        assert_eq!(entry.active_slot(), 1);
        assert_eq!(entry.slot_display(0), "5");
    }

    #[test]
    fn non_digit_and_multi_character_input_is_rejected() {
        let mut entry = CodeEntry::new(4);
        entry.input(0, "1");

        for raw in ["a", "!", "12", "1a", "١"] {
            let commands = entry.input(1, raw);
            assert!(commands.is_empty(), "{raw:?} should be rejected");
        }

        assert_eq!(entry.slot_display(0), "1");
        assert_eq!(entry.slot_display(1), "");
        assert_eq!(entry.active_slot(), 1);
    }

    #[test]
    fn empty_input_clears_the_slot() {
        let mut entry = CodeEntry::new(4);
        entry.input(0, "7");

        let commands = entry.input(0, "");

        assert!(commands.is_empty());
        assert_eq!(entry.slot_display(0), "");
        assert_eq!(entry.active_slot(), 0);
        assert!(!entry.is_complete());
    }

    #[test]
    fn whitespace_only_input_clears_like_empty() {
        let mut entry = CodeEntry::new(4);
        entry.input(2, "3");

        entry.input(2, "  ");

        assert_eq!(entry.slot_display(2), "");
    }

    #[test]
    fn completing_the_last_slot_arms_auto_submit_once() {
        let mut entry = CodeEntry::new(4);

        let commands = type_digits(&mut entry, &["1", "2", "3", "4"]);

        let scheduled = commands
            .iter()
            .filter(|command| **command == EntryCommand::ScheduleAutoSubmit)
            .count();
        assert_eq!(scheduled, 1);
        assert!(entry.is_complete());

        // Replacing the last digit while already armed must not arm again.
        let commands = entry.input(3, "9");
        assert!(commands.is_empty());
    }

    #[test]
    fn completing_at_a_middle_slot_does_not_auto_submit() {
        let mut entry = CodeEntry::new(4);
        entry.input(0, "1");
        entry.input(1, "2");
        entry.input(3, "4");

        let commands = entry.input(2, "3");

        assert_eq!(commands, vec![EntryCommand::Focus(3)]);
        assert!(entry.is_complete());
        assert!(entry.can_submit());
    }

    #[test]
    fn submit_emits_verify_exactly_once() {
        let mut entry = CodeEntry::new(4);
        type_digits(&mut entry, &["1", "2", "3", "4"]);

        let commands = entry.submit();
        assert_eq!(commands, vec![EntryCommand::Verify("1234".to_string())]);
        assert!(entry.is_submitting());

        assert!(entry.submit().is_empty());
    }

    #[test]
    fn submit_with_an_incomplete_buffer_is_a_no_op() {
        let mut entry = CodeEntry::new(4);
        entry.input(0, "1");

        assert!(entry.submit().is_empty());
        assert!(!entry.is_submitting());
    }

    #[test]
    fn stale_auto_submit_after_clearing_a_slot_is_a_no_op() {
        let mut entry = CodeEntry::new(4);
        type_digits(&mut entry, &["1", "2", "3", "4"]);
        entry.input(1, "");

        // The timer fires anyway; the incomplete buffer must stop it.
        assert!(entry.submit().is_empty());
        assert!(!entry.is_submitting());
    }

    #[test]
    fn backspace_on_an_empty_slot_moves_focus_back() {
        let mut entry = CodeEntry::new(4);
        entry.input(0, "1");

        let commands = entry.backspace(1);

        assert_eq!(commands, vec![EntryCommand::Focus(0)]);
        assert_eq!(entry.active_slot(), 0);
        assert_eq!(entry.slot_display(0), "1", "previous digit must survive");
    }

    #[test]
    fn backspace_at_slot_zero_is_a_no_op() {
        let mut entry = CodeEntry::new(4);

        assert!(entry.backspace(0).is_empty());
        assert_eq!(entry.active_slot(), 0);
    }

    #[test]
    fn backspace_on_a_filled_slot_defers_to_the_input_event() {
        let mut entry = CodeEntry::new(4);
        entry.input(0, "1");
        entry.input(1, "2");

        assert!(entry.backspace(1).is_empty());
        assert_eq!(entry.slot_display(1), "2");
    }

    #[test]
    fn resend_clears_the_buffer_and_starts_the_cooldown() {
        let mut entry = CodeEntry::new(4);
        type_digits(&mut entry, &["1", "2", "3", "4"]);

        let commands = entry.request_resend(120);

        assert_eq!(
            commands,
            vec![EntryCommand::SendCode, EntryCommand::Focus(0)]
        );
        assert_eq!(entry.active_slot(), 0);
        assert_eq!(entry.cooldown_remaining(), 120);
        for index in 0..entry.length() {
            assert_eq!(entry.slot_display(index), "");
        }

        for _ in 0..120 {
            entry.tick();
        }
        assert_eq!(entry.cooldown_remaining(), 0);
        assert!(entry.can_resend());

        entry.tick();
        assert_eq!(entry.cooldown_remaining(), 0, "cooldown clamps at zero");
    }

    #[test]
    fn resend_during_cooldown_is_a_no_op_with_no_send() {
        let mut entry = CodeEntry::new(4);
        entry.request_resend(45);
        entry.input(0, "9");

        let commands = entry.request_resend(45);

        assert!(commands.is_empty());
        assert_eq!(entry.slot_display(0), "9");
        assert_eq!(entry.cooldown_remaining(), 45);
        assert!(!entry.can_resend());
    }

    #[test]
    fn failed_verification_keeps_the_digits_for_correction() {
        let mut entry = CodeEntry::new(4);
        type_digits(&mut entry, &["1", "2", "3", "4"]);

        let commands = entry.submit();
        assert_eq!(commands, vec![EntryCommand::Verify("1234".to_string())]);

        entry.verification_failed();

        assert!(!entry.is_submitting());
        assert!(entry.can_submit());
        assert_eq!(entry.submit(), vec![EntryCommand::Verify("1234".to_string())]);
    }

    #[test]
    fn correcting_the_last_digit_after_failure_re_arms_auto_submit() {
        let mut entry = CodeEntry::new(4);
        type_digits(&mut entry, &["1", "2", "3", "4"]);
        entry.submit();
        entry.verification_failed();

        let commands = entry.input(3, "7");

        assert_eq!(commands, vec![EntryCommand::ScheduleAutoSubmit]);
        assert_eq!(entry.submit(), vec![EntryCommand::Verify("1237".to_string())]);
    }

    #[test]
    fn input_and_backspace_are_ignored_while_submitting() {
        let mut entry = CodeEntry::new(4);
        type_digits(&mut entry, &["1", "2", "3", "4"]);
        entry.submit();

        assert!(entry.input(0, "9").is_empty());
        assert!(entry.backspace(0).is_empty());
        assert!(entry.request_resend(120).is_empty());
        assert_eq!(entry.slot_display(0), "1");
    }

    #[test]
    fn out_of_range_slot_index_is_rejected() {
        let mut entry = CodeEntry::new(4);

        assert!(entry.input(4, "1").is_empty());
        assert!(entry.backspace(7).is_empty());
    }

    #[test]
    fn zero_length_is_clamped_to_one_slot() {
        let entry = CodeEntry::new(0);
        assert_eq!(entry.length(), 1);
    }

    #[test]
    fn six_digit_codes_work_the_same_way() {
        let mut entry = CodeEntry::new(6);
        let commands = type_digits(&mut entry, &["9", "8", "7", "6", "5", "4"]);

        let scheduled = commands
            .iter()
            .filter(|command| **command == EntryCommand::ScheduleAutoSubmit)
            .count();
        assert_eq!(scheduled, 1);
        assert_eq!(
            entry.submit(),
            vec![EntryCommand::Verify("987654".to_string())]
        );
    }

    #[test]
    fn format_cooldown_renders_minutes_and_seconds() {
        assert_eq!(format_cooldown(0), "0:00");
        assert_eq!(format_cooldown(45), "0:45");
        assert_eq!(format_cooldown(120), "2:00");
        assert_eq!(format_cooldown(605), "10:05");
    }
}
