//! Scripted, headless walk through a deck of profiles.
//!
//! ```text
//! cargo run --package deck-demo
//! RUST_LOG=swipedeck=debug cargo run --package deck-demo
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{ensure, Context, Result};
use swipedeck::{
    Deck, DeckConfig, DeckFrame, DeckItem, DeckPhase, DeckProps, PointerEvent, SwipeDirection,
};
use swipedeck_core::Runtime;

const VIEWPORT_WIDTH: f32 = 360.0;
const FRAME_NANOS: u64 = 16_666_667;

#[derive(Debug, Clone)]
struct Profile {
    id: u32,
    name: &'static str,
    city: &'static str,
}

impl DeckItem for Profile {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

fn profiles() -> Vec<Profile> {
    [
        ("Ada", "London"),
        ("Brian", "Lisbon"),
        ("Chen", "Taipei"),
        ("Dana", "Austin"),
        ("Emeka", "Lagos"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, city), id)| Profile { id, name, city })
    .collect()
}

/// Host side of the demo: owns the runtime and advances its clock.
struct Host {
    runtime: Runtime,
    now: u64,
}

impl Host {
    fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.runtime.needs_frame() {
            self.now += FRAME_NANOS;
            self.runtime.drain_frame_callbacks(self.now);
            frames += 1;
        }
        frames
    }
}

fn drag(deck: &Deck<Profile, String>, dx: f32, dy: f32) {
    let origin = (VIEWPORT_WIDTH / 2.0, VIEWPORT_WIDTH / 2.0);
    deck.handle_pointer_event(&PointerEvent::down(1, origin.0, origin.1));
    for step in 1..=5 {
        let fraction = step as f32 / 5.0;
        deck.handle_pointer_event(&PointerEvent::moved(
            1,
            origin.0 + dx * fraction,
            origin.1 + dy * fraction,
        ));
    }
    deck.handle_pointer_event(&PointerEvent::up(1, origin.0 + dx, origin.1 + dy));
}

fn print_frame(label: &str, frame: &DeckFrame<u32, String>) {
    println!("-- {}", label);
    match frame {
        DeckFrame::Exhausted(view) => println!("   {}", view),
        DeckFrame::Cards(cards) => {
            for card in cards.iter().rev() {
                let transform = card
                    .transform
                    .map(|t| {
                        format!(
                            " dx={:.1} dy={:.1} rot={:.1}°",
                            t.translate_x, t.translate_y, t.rotate_deg
                        )
                    })
                    .unwrap_or_default();
                println!(
                    "   z={} top={:>4.1} {}{}",
                    card.z_index, card.placement.top, card.view, transform
                );
            }
        }
    }
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = DeckConfig::builder(VIEWPORT_WIDTH)
        .with_max_stacked_cards(2)
        .build()
        .context("building deck config")?;

    let liked = Rc::new(RefCell::new(Vec::new()));
    let passed = Rc::new(RefCell::new(Vec::new()));
    let liked_sink = Rc::clone(&liked);
    let passed_sink = Rc::clone(&passed);
    let props = DeckProps::new(
        |profile: &Profile| format!("{} ({})", profile.name, profile.city),
        || "No more profiles".to_string(),
    )
    .on_swipe_right(move |profile: &Profile| {
        log::info!("liked {}", profile.name);
        liked_sink.borrow_mut().push(profile.name);
    })
    .on_swipe_left(move |profile: &Profile| {
        log::info!("passed on {}", profile.name);
        passed_sink.borrow_mut().push(profile.name);
    });

    let mut host = Host {
        runtime: Runtime::new(),
        now: 0,
    };
    let deck = Deck::new(host.runtime.handle(), config, props, profiles());
    print_frame("initial", &deck.render());

    drag(&deck, 0.1 * VIEWPORT_WIDTH, 20.0);
    print_frame("released short of the threshold", &deck.render());
    let frames = host.settle();
    print_frame(&format!("snapped back after {} frames", frames), &deck.render());

    drag(&deck, 0.4 * VIEWPORT_WIDTH, -15.0);
    print_frame("released past the threshold", &deck.render());
    host.settle();
    print_frame("after swipe right", &deck.render());

    drag(&deck, -0.6 * VIEWPORT_WIDTH, 0.0);
    host.settle();
    deck.force_swipe(SwipeDirection::Right)
        .context("forcing a swipe on the third profile")?;
    host.settle();
    print_frame("after a pass and a forced like", &deck.render());

    while !deck.is_exhausted() {
        deck.force_swipe(SwipeDirection::Left)?;
        host.settle();
    }
    print_frame("end of deck", &deck.render());
    ensure!(deck.phase() == DeckPhase::Idle, "deck did not come to rest");

    deck.set_data(profiles());
    print_frame("data reloaded", &deck.render());

    println!();
    println!("liked:  {:?}", liked.borrow());
    println!("passed: {:?}", passed.borrow());
    Ok(())
}
