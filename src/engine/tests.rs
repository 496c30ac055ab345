use super::*;
use crate::data::read_bank_embedded;
use crate::model::Action;
use crate::storage::MemoryStore;
use crate::timer::IntervalClock;
use crate::view_models::View;
use std::time::Duration;

type TestEngine = QuizEngine<IntervalClock, MemoryStore>;

fn engine_with(store: MemoryStore) -> TestEngine {
    let bank = read_bank_embedded().unwrap();
    QuizEngine::new(bank, IntervalClock::new(), store)
}

fn engine() -> TestEngine {
    engine_with(MemoryStore::new())
}

fn wait(e: &mut TestEngine, secs: u64) {
    let now = e.scheduler().now() + Duration::from_secs(secs);
    e.poll_timers(now);
}

fn answer_correctly(e: &mut TestEngine) {
    let Phase::Question(idx) = e.phase() else {
        panic!("not on a question");
    };
    let answer = e.questions()[idx].correct_answer.clone();
    e.dispatch(Action::Select(answer));
}

fn answer_wrong(e: &mut TestEngine) {
    let Phase::Question(idx) = e.phase() else {
        panic!("not on a question");
    };
    let q = &e.questions()[idx];
    let wrong = q
        .options
        .iter()
        .find(|o| **o != q.correct_answer)
        .cloned()
        .unwrap();
    e.dispatch(Action::Select(wrong));
}

#[test]
fn percent_score_rounds_and_handles_empty_quiz() {
    assert_eq!(percent_score(0, 0), 0);
    assert_eq!(percent_score(0, 5), 0);
    assert_eq!(percent_score(2, 5), 40);
    assert_eq!(percent_score(5, 5), 100);
    assert_eq!(percent_score(1, 3), 33);
    assert_eq!(percent_score(2, 3), 67);
    assert_eq!(percent_score(1, 8), 13);
}

#[test]
fn begin_resets_session_and_starts_one_countdown() {
    let mut e = engine();
    assert_eq!(e.phase(), Phase::Start);
    assert_eq!(e.scheduler().live_count(), 0);

    e.dispatch(Action::Begin);

    assert_eq!(e.phase(), Phase::Question(0));
    assert_eq!(e.session().current_index(), 0);
    assert_eq!(e.session().correct_count(), 0);
    assert_eq!(e.session().remaining_seconds(), 30);
    assert_eq!(e.scheduler().live_count(), 1);
    assert!(e.session().active_timer().is_some());
}

#[test]
fn all_correct_scores_100_and_persists_it() {
    let mut e = engine();
    e.begin();
    for _ in 0..5 {
        wait(&mut e, 3);
        answer_correctly(&mut e);
    }

    assert_eq!(e.phase(), Phase::Start);
    assert_eq!(e.session().correct_count(), 5);
    assert_eq!(e.store().get("previous-score").as_deref(), Some("100"));
    assert_eq!(e.scheduler().live_count(), 0);
}

#[test]
fn two_correct_three_timeouts_scores_40() {
    let mut e = engine();
    e.begin();
    answer_correctly(&mut e);
    answer_correctly(&mut e);
    for _ in 0..3 {
        wait(&mut e, 30);
    }

    assert_eq!(e.phase(), Phase::Start);
    assert_eq!(e.session().current_index(), 5);
    assert_eq!(e.session().correct_count(), 2);
    assert_eq!(e.store().get("previous-score").as_deref(), Some("40"));
}

#[test]
fn countdown_ticks_down_and_times_out_without_credit() {
    let mut e = engine();
    e.begin();

    wait(&mut e, 1);
    assert_eq!(e.session().remaining_seconds(), 29);
    wait(&mut e, 28);
    assert_eq!(e.session().remaining_seconds(), 1);
    assert_eq!(e.phase(), Phase::Question(0));

    // the tick that reaches zero also advances
    wait(&mut e, 1);
    assert_eq!(e.phase(), Phase::Question(1));
    assert_eq!(e.session().current_index(), 1);
    assert_eq!(e.session().correct_count(), 0);
    assert_eq!(e.session().remaining_seconds(), 30);
    assert_eq!(e.scheduler().live_count(), 1);
}

#[test]
fn answering_replaces_the_countdown() {
    let mut e = engine();
    e.begin();
    let first = e.session().active_timer().unwrap();
    wait(&mut e, 10);

    answer_wrong(&mut e);

    let second = e.session().active_timer().unwrap();
    assert_ne!(first, second);
    assert!(!e.scheduler().is_live(first));
    assert_eq!(e.scheduler().live_count(), 1);
    assert_eq!(e.session().remaining_seconds(), 30);
    assert_eq!(e.session().correct_count(), 0);
}

#[test]
fn stale_tick_does_not_advance() {
    let mut e = engine();
    e.begin();
    let old = e.session().active_timer().unwrap();
    answer_correctly(&mut e);

    for _ in 0..40 {
        e.on_tick(old);
    }

    assert_eq!(e.phase(), Phase::Question(1));
    assert_eq!(e.session().current_index(), 1);
    assert_eq!(e.session().remaining_seconds(), 30);
}

#[test]
fn long_gap_only_times_out_the_current_question() {
    let mut e = engine();
    e.begin();
    wait(&mut e, 500);

    assert_eq!(e.phase(), Phase::Question(1));
    assert_eq!(e.session().remaining_seconds(), 30);
}

#[test]
fn empty_bank_ends_immediately_with_zero() {
    let mut e = QuizEngine::new(QuizBank::default(), IntervalClock::new(), MemoryStore::new());
    e.begin();

    assert_eq!(e.phase(), Phase::Start);
    assert_eq!(e.store().get("previous-score").as_deref(), Some("0"));
    assert_eq!(e.scheduler().live_count(), 0);
}

#[test]
fn new_score_overwrites_previous_one() {
    let mut e = engine_with(MemoryStore::with_value("previous-score", "100"));
    e.begin();
    for _ in 0..5 {
        answer_wrong(&mut e);
    }
    assert_eq!(e.store().get("previous-score").as_deref(), Some("0"));
}

#[test]
fn first_run_shows_no_previous_score() {
    let e = engine();
    let View::Start(view) = e.view() else {
        panic!("expected start screen");
    };
    assert_eq!(view.previous_score_label, None);
    assert_eq!(view.start.label, "Start Quiz!");
    assert_eq!(view.start.action, Action::Begin);
}

#[test]
fn later_run_shows_previous_score() {
    let e = engine_with(MemoryStore::with_value("previous-score", "60"));
    let View::Start(view) = e.view() else {
        panic!("expected start screen");
    };
    assert_eq!(view.previous_score_label.as_deref(), Some("Previous Score: 60%"));
}

#[test]
fn question_view_lists_options_in_order_with_their_own_actions() {
    let mut e = engine();
    e.begin();
    wait(&mut e, 5);

    let View::Question(view) = e.view() else {
        panic!("expected a question");
    };
    assert_eq!(view.text, "Who created JavaScript?");
    assert_eq!(view.remaining_seconds, 25);
    let labels: Vec<_> = view.options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Linus Torvalds", "Brendan Eich", "Dan Abramov", "Douglas Crockford"]
    );

    // clicking the second button credits exactly that option
    e.dispatch(view.options[1].action.clone());
    assert_eq!(e.session().correct_count(), 1);
}

#[test]
fn clicks_in_the_wrong_phase_are_ignored() {
    let mut e = engine();
    e.dispatch(Action::Select("Brendan Eich".into()));
    assert_eq!(e.phase(), Phase::Start);
    assert_eq!(e.session().current_index(), 0);

    e.begin();
    answer_correctly(&mut e);
    e.dispatch(Action::Begin);
    assert_eq!(e.phase(), Phase::Question(1));
    assert_eq!(e.session().correct_count(), 1);
}

#[test]
fn every_resolution_sequence_keeps_the_invariants() {
    #[derive(Clone, Copy)]
    enum Step {
        Right,
        Wrong,
        Timeout,
    }
    const STEPS: [Step; 3] = [Step::Right, Step::Wrong, Step::Timeout];

    for combo in 0..3usize.pow(5) {
        let mut e = engine();
        e.begin();
        let mut rest = combo;
        let mut expected_correct = 0;

        for n in 1..=5 {
            let step = STEPS[rest % 3];
            rest /= 3;
            let before = e.session().correct_count();
            match step {
                Step::Right => {
                    answer_correctly(&mut e);
                    expected_correct += 1;
                }
                Step::Wrong => answer_wrong(&mut e),
                Step::Timeout => {
                    wait(&mut e, 30);
                    assert_eq!(e.session().correct_count(), before);
                }
            }

            let s = e.session();
            assert_eq!(s.current_index(), n);
            assert!(s.correct_count() <= s.current_index());
            assert!(e.scheduler().live_count() <= 1);
            if n < 5 {
                assert_eq!(e.phase(), Phase::Question(n));
                assert_eq!(e.scheduler().live_count(), 1);
                assert_eq!(s.remaining_seconds(), 30);
            } else {
                assert_eq!(e.phase(), Phase::Start);
                assert_eq!(e.scheduler().live_count(), 0);
            }
        }

        assert_eq!(e.session().correct_count(), expected_correct);
        let expected = percent_score(expected_correct, 5).to_string();
        assert_eq!(e.store().get("previous-score"), Some(expected));
    }
}
