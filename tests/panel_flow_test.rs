use chatpane::animation::{PanelLifecycle, PanelState, Scheduler, StatusTicker, TimerEvent, Typewriter};
use chatpane::chat::{ImageOption, PanelContent, PanelMode, PromptOption};
use chatpane::config::TimingConfig;
use chatpane::ui::components::ArtifactPanel;
use chatpane::ui::core::{Action, ScrollLock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn image(id: &str) -> ImageOption {
    ImageOption {
        id: id.to_string(),
        image_url: format!("{id}.png"),
        title: id.to_uppercase(),
        description: None,
    }
}

fn image_panel(scheduler: &mut Scheduler) -> ArtifactPanel {
    let mut panel = ArtifactPanel::new(&TimingConfig::default(), ScrollLock::new());
    panel.set_content(
        PanelContent {
            mode: PanelMode::Images,
            images: vec![image("img-1"), image("img-2"), image("img-3")],
            ..PanelContent::default()
        },
        scheduler,
    );
    panel
}

fn prompts(texts: &[&str]) -> PanelContent {
    PanelContent {
        mode: PanelMode::Prompts,
        prompts: texts
            .iter()
            .enumerate()
            .map(|(index, text)| PromptOption {
                id: format!("p{index}"),
                text: text.to_string(),
            })
            .collect(),
        ..PanelContent::default()
    }
}

/// Drain the scheduler up to `dt` from now through the panel
fn pump(panel: &mut ArtifactPanel, scheduler: &mut Scheduler, dt: u64) -> Vec<Action> {
    let until = scheduler.now() + ms(dt);
    let mut actions = Vec::new();
    while let Some(fired) = scheduler.next_due(until) {
        let action = panel.on_timer(&fired, scheduler);
        if !action.is_none() {
            actions.push(action);
        }
    }
    scheduler.advance_to(until);
    actions
}

#[test]
fn test_rapid_toggles_settle_on_last_signal() {
    for toggles in 1..8u64 {
        let mut scheduler = Scheduler::new();
        let lock = ScrollLock::new();
        let mut lifecycle = PanelLifecycle::new(ms(600), lock.clone());

        let mut is_open = false;
        for step in 0..toggles {
            is_open = !is_open;
            lifecycle.set_open(is_open, &mut scheduler);
            // every gap is shorter than the transition
            for fired in scheduler.advance(ms(100 + step * 50)) {
                lifecycle.on_timer(&fired);
            }
        }
        for fired in scheduler.advance(ms(600)) {
            lifecycle.on_timer(&fired);
        }

        let expected = if is_open { PanelState::Open } else { PanelState::Closed };
        assert_eq!(lifecycle.state(), expected, "after {toggles} toggles");
        assert!(!lifecycle.has_pending_transition());
        assert_eq!(lock.is_locked(), is_open);
    }
}

#[test]
fn test_typewriter_fires_exactly_len_ticks() {
    for text in ["a", "hello", "ünïcödé ✓ text"] {
        let mut scheduler = Scheduler::new();
        let mut writer = Typewriter::new(ms(30), ms(300), ms(150));
        writer.start_reveal("t", text, &mut scheduler);

        let mut ticks = 0;
        let until = ms(10_000);
        while let Some(fired) = scheduler.next_due(until) {
            if matches!(fired.event, TimerEvent::RevealTick { .. }) {
                ticks += 1;
            }
            writer.on_timer(&fired, &mut scheduler);
        }

        let target = writer.target("t").unwrap();
        assert_eq!(ticks, text.chars().count());
        assert_eq!(target.display(), text);
        assert_eq!(scheduler.pending_count(), 0);
    }
}

#[test]
fn test_staggered_targets_respect_offsets() {
    let mut scheduler = Scheduler::new();
    let mut writer = Typewriter::new(ms(30), ms(300), ms(150));
    let prompts = [("p0", "first prompt"), ("p1", "second"), ("p2", "third one"), ("p3", "x")];
    writer.start_staggered(prompts, &mut scheduler);

    let mut first_tick = [None; 4];
    let mut counts = [0usize; 4];
    let until = ms(10_000);
    while let Some(fired) = scheduler.next_due(until) {
        if let TimerEvent::RevealTick { target } = fired.event {
            first_tick[target].get_or_insert(scheduler.now());
            counts[target] += 1;
        }
        writer.on_timer(&fired, &mut scheduler);
    }

    for (index, (_, text)) in prompts.iter().enumerate() {
        let first = first_tick[index].unwrap();
        assert!(first >= ms(300 + 150 * index as u64));
        assert_eq!(counts[index], text.chars().count());
    }
}

#[test]
fn test_reactivation_leaves_no_orphan_timers() {
    let mut scheduler = Scheduler::new();
    let mut ticker = StatusTicker::with_rng(ms(800), ms(1000), StdRng::seed_from_u64(42));

    ticker.activate(vec!["a".into(), "b".into()], &mut scheduler).unwrap();
    scheduler.advance(ms(900));
    ticker.activate(vec!["c".into(), "d".into()], &mut scheduler).unwrap();
    assert_eq!(scheduler.pending_count(), 2);

    for fired in scheduler.advance(ms(5000)) {
        ticker.on_timer(&fired, &scheduler);
    }
    assert!(["c", "d"].contains(&ticker.active_phrase()));

    ticker.deactivate(&mut scheduler);
    assert_eq!(scheduler.pending_count(), 0);
    let rotations = ticker.rotations();
    let phrase = ticker.active_phrase().to_string();
    assert!(scheduler.advance(ms(5000)).is_empty());
    assert_eq!(ticker.rotations(), rotations);
    assert_eq!(ticker.active_phrase(), phrase);
}

#[test]
fn test_selecting_known_option() {
    let mut scheduler = Scheduler::new();
    let mut panel = image_panel(&mut scheduler);
    panel.set_open(true, &mut scheduler);
    pump(&mut panel, &mut scheduler, 600);

    let action = panel.select("img-2", &mut scheduler);
    assert_eq!(
        action,
        Action::ImageSelected {
            id: "img-2".into(),
            option: image("img-2"),
        }
    );
    assert_eq!(panel.selected_id(), Some("img-2"));

    assert!(pump(&mut panel, &mut scheduler, 799).is_empty());
    assert_eq!(pump(&mut panel, &mut scheduler, 1), vec![Action::ClosePanel]);
}

#[test]
fn test_reselect_rearms_close_request() {
    let mut scheduler = Scheduler::new();
    let mut panel = image_panel(&mut scheduler);
    panel.set_open(true, &mut scheduler);
    pump(&mut panel, &mut scheduler, 600);

    panel.select("img-1", &mut scheduler);
    pump(&mut panel, &mut scheduler, 500);
    panel.select("img-3", &mut scheduler);
    assert_eq!(panel.selected_id(), Some("img-3"));

    assert!(pump(&mut panel, &mut scheduler, 799).is_empty());
    assert_eq!(pump(&mut panel, &mut scheduler, 1), vec![Action::ClosePanel]);
}

#[test]
fn test_selecting_unknown_option_changes_nothing() {
    let mut scheduler = Scheduler::new();
    let mut panel = image_panel(&mut scheduler);
    panel.set_open(true, &mut scheduler);
    pump(&mut panel, &mut scheduler, 600);
    panel.select("img-1", &mut scheduler);
    pump(&mut panel, &mut scheduler, 900);

    let pending = scheduler.pending_count();
    assert_eq!(panel.select("img-99", &mut scheduler), Action::None);
    assert_eq!(panel.selected_id(), Some("img-1"));
    assert_eq!(scheduler.pending_count(), pending);
    assert!(!panel.has_pending_close());
}

#[test]
fn test_scroll_lock_released_when_dropped_mid_animation() {
    let mut scheduler = Scheduler::new();
    let lock = ScrollLock::new();
    {
        let mut panel = ArtifactPanel::new(&TimingConfig::default(), lock.clone());
        panel.set_open(true, &mut scheduler);
        scheduler.advance(ms(300));
        assert!(lock.is_locked());
    }
    assert!(!lock.is_locked());
}

#[test]
fn test_content_changes_while_open_restart_reveals_without_leaks() {
    let mut scheduler = Scheduler::new();
    let mut panel = ArtifactPanel::new(&TimingConfig::default(), ScrollLock::new());
    panel.set_content(
        prompts(&["a lighthouse on a rocky shore at golden hour", "the same scene in heavy fog"]),
        &mut scheduler,
    );
    panel.set_open(true, &mut scheduler);
    pump(&mut panel, &mut scheduler, 600);
    assert_eq!(panel.state(), PanelState::Open);
    assert!(panel.typewriter().targets()[0].revealed_len() > 0);
    assert!(!panel.typewriter().is_complete());

    // New prompts mid-reveal start over from nothing
    panel.set_content(prompts(&["a red barn in snow", "a windmill at dusk"]), &mut scheduler);
    let targets = panel.typewriter().targets();
    assert_eq!(targets[0].full_text(), "a red barn in snow");
    assert!(targets.iter().all(|target| target.revealed_len() == 0));
    assert_eq!(scheduler.pending_count(), panel.typewriter().timer_count());

    // Only the new reveal's timers run: base delay, then one char per 30ms
    pump(&mut panel, &mut scheduler, 400);
    let first = &panel.typewriter().targets()[0];
    assert!(first.revealed_len() > 0 && first.revealed_len() <= 3);

    // Switching to text replaces the prompt reveal
    panel.set_content(
        PanelContent {
            mode: PanelMode::Text,
            text: "A quiet harbor at dawn".into(),
            ..PanelContent::default()
        },
        &mut scheduler,
    );
    assert_eq!(panel.typewriter().targets().len(), 1);
    assert_eq!(panel.typewriter().targets()[0].revealed_len(), 0);
    assert_eq!(scheduler.pending_count(), panel.typewriter().timer_count());

    pump(&mut panel, &mut scheduler, 100);
    assert!(panel.typewriter().targets()[0].revealed_len() > 0);

    // Images have nothing to reveal
    panel.set_content(
        PanelContent {
            mode: PanelMode::Images,
            images: vec![image("img-1")],
            ..PanelContent::default()
        },
        &mut scheduler,
    );
    assert_eq!(panel.typewriter().timer_count(), 0);
    assert!(panel.typewriter().targets().is_empty());
    assert_eq!(scheduler.pending_count(), 0);
    assert!(pump(&mut panel, &mut scheduler, 2000).is_empty());
    assert_eq!(panel.state(), PanelState::Open);
}
