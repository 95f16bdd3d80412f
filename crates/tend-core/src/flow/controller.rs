//! Flow controller owning all mutable reflection state.

use super::step::Step;
use crate::category::Category;
use crate::classify::Classifier;
use crate::config::Config;
use crate::error::{Result, TendError};
use crate::fabricate::{self, CommunityStats};
use crate::insight::InsightGenerator;
use crate::session::{HistoryEntry, Profile, Session};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Drives the guided reflection sequence.
///
/// `FlowController` is the single owner of the active `Session`, the
/// `Profile`, and the history list; renderers receive them by reference.
/// It is responsible for:
/// - Enforcing the step transition contract
/// - Validating reflection input before processing
/// - Running the classifier, insight generator, and fabricators
/// - Finalizing confirmed reflections into history
pub struct FlowController {
    step: Step,
    session: Session,
    profile: Profile,
    history: Vec<HistoryEntry>,
    classifier: Classifier,
    insights: InsightGenerator,
    config: Config,
    rng: StdRng,
}

impl FlowController {
    /// Creates a controller seeded from OS entropy.
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a controller with a fixed seed for reproducible runs.
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, rng: StdRng) -> Self {
        Self {
            step: Step::Welcome,
            session: Session::new(),
            profile: Profile::new(),
            history: Vec::new(),
            classifier: Classifier::new(),
            insights: InsightGenerator::new(),
            config,
            rng,
        }
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    /// The current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// The active session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The aggregate profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Completed reflections, most recent first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The explorer link for the current session's receipt, if one exists.
    pub fn explorer_link(&self) -> Option<String> {
        self.session
            .receipt_id
            .as_deref()
            .map(|id| fabricate::explorer_url(&self.config.explorer_url, id))
    }

    // ============================================================================
    // Transitions
    // ============================================================================

    /// Welcome -> Input.
    pub fn begin(&mut self) -> Result<()> {
        self.expect_step(Step::Welcome, "begin")?;
        self.step = Step::Input;
        Ok(())
    }

    /// Welcome -> Onboarding.
    pub fn begin_onboarding(&mut self) -> Result<()> {
        self.expect_step(Step::Welcome, "view onboarding")?;
        self.step = Step::Onboarding;
        Ok(())
    }

    /// Onboarding -> Input.
    pub fn finish_onboarding(&mut self) -> Result<()> {
        self.expect_step(Step::Onboarding, "finish onboarding")?;
        self.step = Step::Input;
        Ok(())
    }

    /// Input -> Processing.
    ///
    /// # Errors
    ///
    /// Returns `InputTooShort` when the trimmed text is shorter than the
    /// configured minimum; the session is left unchanged in that case.
    pub fn submit(&mut self, text: &str) -> Result<()> {
        self.expect_step(Step::Input, "submit a reflection")?;
        let trimmed = text.trim();
        let len = trimmed.chars().count();
        if len < self.config.min_input_len {
            return Err(TendError::input_too_short(len, self.config.min_input_len));
        }
        self.session.input = trimmed.to_string();
        self.step = Step::Processing;
        log::debug!("reflection submitted ({len} chars)");
        Ok(())
    }

    /// Returns the simulated analysis delay for this run.
    ///
    /// Drawn uniformly from the configured range. The caller is expected
    /// to sleep for this long before calling [`finish_processing`];
    /// the delay is not cancellable because no other transition is
    /// reachable from `Processing`.
    ///
    /// [`finish_processing`]: Self::finish_processing
    pub fn processing_delay(&mut self) -> Duration {
        let min = self.config.delay_min_ms.min(self.config.delay_max_ms);
        let max = self.config.delay_min_ms.max(self.config.delay_max_ms);
        Duration::from_millis(self.rng.gen_range(min..=max))
    }

    /// Processing -> Insight.
    ///
    /// Runs the classifier, the insight generator, and the receipt/report
    /// fabricators, storing their outputs on the session.
    pub fn finish_processing(&mut self) -> Result<()> {
        self.expect_step(Step::Processing, "finish analysis")?;
        let assigned = self.classifier.classify(&self.session.input, &mut self.rng);
        let insight = self.insights.generate(&self.session.input, &mut self.rng);
        self.session.assigned = Some(assigned);
        self.session.insight = Some(insight);
        self.session.receipt_id = Some(fabricate::receipt_id(&mut self.rng));
        self.session.report = Some(fabricate::ethics_report(&mut self.rng));
        self.step = Step::Insight;
        log::info!("reflection classified as {assigned}");
        Ok(())
    }

    /// Insight -> PathSelection.
    pub fn reveal(&mut self) -> Result<()> {
        self.expect_step(Step::Insight, "choose a path")?;
        self.step = Step::PathSelection;
        Ok(())
    }

    /// PathSelection -> Dashboard.
    ///
    /// The only cross-entity mutation in the flow: snapshots the session
    /// into a history entry (prepended, most recent first), increments the
    /// profile counters, and records the chosen path. Not undoable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` when called outside `PathSelection` or
    /// before processing has assigned a category.
    pub fn confirm(&mut self, chosen: Category) -> Result<&HistoryEntry> {
        self.expect_step(Step::PathSelection, "confirm a path")?;
        if !self.session.is_processed() {
            return Err(TendError::invalid_transition(
                Step::PathSelection.name(),
                "confirm an unprocessed reflection",
            ));
        }
        self.session.chosen = Some(chosen);
        let entry = HistoryEntry::from_session(&self.session, chosen);
        self.history.insert(0, entry);
        self.profile.record(chosen);
        self.step = Step::Dashboard;
        // Safe to index: we just inserted at position 0
        Ok(&self.history[0])
    }

    /// Dashboard -> Input.
    ///
    /// Resets the session for a new cycle; history and profile counters
    /// are preserved.
    pub fn start_new(&mut self) -> Result<()> {
        self.expect_step(Step::Dashboard, "start a new reflection")?;
        self.session.clear();
        self.step = Step::Input;
        Ok(())
    }

    /// Fabricates fresh community statistics for the dashboard.
    pub fn community_stats(&mut self) -> CommunityStats {
        fabricate::community_stats(&mut self.rng)
    }

    fn expect_step(&self, expected: Step, action: &'static str) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(TendError::invalid_transition(self.step.name(), action))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> FlowController {
        FlowController::with_seed(Config::default(), 42)
    }

    /// Drives a fresh controller to the Input step.
    fn at_input() -> FlowController {
        let mut flow = controller();
        flow.begin().unwrap();
        flow
    }

    #[test]
    fn test_initial_step_is_welcome() {
        let flow = controller();
        assert_eq!(flow.step(), Step::Welcome);
        assert!(flow.history().is_empty());
        assert_eq!(flow.profile().total_reflections, 0);
    }

    #[test]
    fn test_onboarding_is_optional() {
        let mut flow = controller();
        flow.begin_onboarding().unwrap();
        assert_eq!(flow.step(), Step::Onboarding);
        flow.finish_onboarding().unwrap();
        assert_eq!(flow.step(), Step::Input);
    }

    #[test]
    fn test_short_input_is_rejected_without_state_change() {
        let mut flow = at_input();
        let before = flow.session().clone();

        let err = flow.submit("  tiny  ").unwrap_err();
        assert!(matches!(
            err,
            TendError::InputTooShort { actual: 4, min: 10 }
        ));
        assert_eq!(flow.step(), Step::Input);
        assert_eq!(flow.session(), &before);
    }

    #[test]
    fn test_trimmed_length_is_what_counts() {
        let mut flow = at_input();
        // 9 chars + surrounding whitespace: still too short.
        assert!(flow.submit("   123456789   ").is_err());
        // Exactly 10 trimmed chars passes.
        assert!(flow.submit("1234567890").is_ok());
        assert_eq!(flow.step(), Step::Processing);
    }

    #[test]
    fn test_worked_example() {
        let mut flow = at_input();
        flow.submit("I meditated for 10 minutes").unwrap();
        assert_eq!(flow.step(), Step::Processing);

        flow.finish_processing().unwrap();
        assert_eq!(flow.step(), Step::Insight);
        assert!(flow.session().is_processed());
        assert!(flow.session().receipt_id.is_some());

        flow.reveal().unwrap();
        let previous_len = flow.history().len();
        let entry = flow.confirm(Category::Green).unwrap().clone();
        assert_eq!(entry.chosen, Category::Green);
        assert_eq!(flow.history().len(), previous_len + 1);
        assert_eq!(flow.step(), Step::Dashboard);
    }

    #[test]
    fn test_keyword_input_classifies_deterministically() {
        let mut flow = at_input();
        flow.submit("I made a plan for the future").unwrap();
        flow.finish_processing().unwrap();
        assert_eq!(flow.session().assigned, Some(Category::Green));
    }

    #[test]
    fn test_unmatched_input_stays_in_domain() {
        let mut flow = at_input();
        flow.submit("zebras juggle quietly at dusk").unwrap();
        flow.finish_processing().unwrap();
        let assigned = flow.session().assigned.unwrap();
        assert!(Category::ALL.contains(&assigned));
    }

    #[test]
    fn test_confirm_snapshots_session() {
        let mut flow = at_input();
        flow.submit("Had a hard talk about an old relationship").unwrap();
        flow.finish_processing().unwrap();
        flow.reveal().unwrap();

        let input = flow.session().input.clone();
        let insight = flow.session().insight.clone().unwrap();
        let entry = flow.confirm(Category::Red).unwrap();

        assert_eq!(entry.input, input);
        assert_eq!(entry.insight, insight);
        assert_eq!(flow.profile().total_reflections, 1);
        assert_eq!(flow.profile().last_chosen, Some(Category::Red));
    }

    #[test]
    fn test_history_is_most_recent_first() {
        let mut flow = at_input();
        for (text, chosen) in [
            ("First reflection about my past", Category::Red),
            ("Second reflection about my goals", Category::Green),
        ] {
            flow.submit(text).unwrap();
            flow.finish_processing().unwrap();
            flow.reveal().unwrap();
            flow.confirm(chosen).unwrap();
            flow.start_new().unwrap();
        }
        assert_eq!(flow.history().len(), 2);
        assert_eq!(flow.history()[0].chosen, Category::Green);
        assert_eq!(flow.history()[1].chosen, Category::Red);
    }

    #[test]
    fn test_start_new_resets_session_but_keeps_records() {
        let mut flow = at_input();
        flow.submit("A reflection about discipline at work").unwrap();
        flow.finish_processing().unwrap();
        flow.reveal().unwrap();
        flow.confirm(Category::Blue).unwrap();

        flow.start_new().unwrap();
        assert_eq!(flow.step(), Step::Input);
        assert_eq!(flow.session(), &Session::new());
        assert_eq!(flow.history().len(), 1);
        assert_eq!(flow.profile().total_reflections, 1);
    }

    #[test]
    fn test_transitions_reject_wrong_step() {
        let mut flow = controller();
        assert!(flow.submit("long enough text here").is_err());
        assert!(flow.finish_processing().is_err());
        assert!(flow.reveal().is_err());
        assert!(flow.confirm(Category::Red).is_err());
        assert!(flow.start_new().is_err());
        // And no cancel path exists from Input back to Welcome.
        flow.begin().unwrap();
        assert!(flow.begin().is_err());
    }

    #[test]
    fn test_processing_delay_within_configured_range() {
        let mut flow = controller();
        for _ in 0..16 {
            let delay = flow.processing_delay();
            assert!(delay >= Duration::from_millis(2000));
            assert!(delay <= Duration::from_millis(2500));
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = |seed: u64| {
            let mut flow = FlowController::with_seed(Config::default(), seed);
            flow.begin().unwrap();
            flow.submit("nothing here matches any rule").unwrap();
            flow.finish_processing().unwrap();
            let session = flow.session().clone();
            (session.assigned, session.insight, session.receipt_id)
        };
        assert_eq!(run(123), run(123));
    }

    #[test]
    fn test_explorer_link_embeds_receipt() {
        let mut flow = at_input();
        assert!(flow.explorer_link().is_none());
        flow.submit("I kept my focus through the afternoon").unwrap();
        flow.finish_processing().unwrap();
        let id = flow.session().receipt_id.clone().unwrap();
        let link = flow.explorer_link().unwrap();
        assert!(link.contains(&id));
        assert!(!link.contains("{id}"));
    }
}
