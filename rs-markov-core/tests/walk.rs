//! Start selection, weighted stepping and walk generation

mod common;

use common::{Words, s};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::{ChainError, MarkovChain, RenderStyle, WalkEnd};

fn cat_dog_chain() -> MarkovChain<String, Words> {
	let (caps, _) = Words::new();
	let mut chain = MarkovChain::new(caps);
	for _ in 0..3 {
		chain.observe(&s("cat"), &s("dog")).unwrap();
	}
	for _ in 0..2 {
		chain.observe(&s("dog"), &s("cat")).unwrap();
	}
	chain
}

#[test]
fn test_pick_next_follows_weights() {
	let (caps, _) = Words::new();
	let mut chain = MarkovChain::new(caps);
	for _ in 0..3 {
		chain.observe(&s("a"), &s("x")).unwrap();
	}
	chain.observe(&s("a"), &s("y")).unwrap();
	let a = chain.find(&s("a")).unwrap();
	let x = chain.find(&s("x")).unwrap();

	let mut rng = StdRng::seed_from_u64(42);
	let draws = 20_000;
	let hits = (0..draws).filter(|_| chain.pick_next(a, &mut rng).unwrap() == x).count();

	let fraction = hits as f64 / draws as f64;
	assert!((fraction - 0.75).abs() < 0.02, "observed {fraction}");
}

#[test]
fn test_pick_next_without_transitions_is_an_error() {
	let (caps, _) = Words::new();
	let mut chain = MarkovChain::new(caps);
	let lone = chain.add(&s("lone")).unwrap();

	let mut rng = StdRng::seed_from_u64(0);
	let err = chain.pick_next(lone, &mut rng).unwrap_err();
	assert!(matches!(err, ChainError::ZeroWeight { state } if state == lone));
}

#[test]
fn test_pick_start_only_returns_valid_states() {
	let (caps, _) = Words::new();
	let mut chain = MarkovChain::new(caps);
	chain.observe(&s("go"), &s("stop.")).unwrap();
	chain.add(&s("island")).unwrap();
	chain.add(&s("other.")).unwrap();
	let go = chain.find(&s("go")).unwrap();

	let mut rng = StdRng::seed_from_u64(7);
	for _ in 0..200 {
		assert_eq!(chain.pick_start(&mut rng).unwrap(), go);
	}
}

#[test]
fn test_pick_start_rejects_registry_without_valid_start() {
	let (caps, _) = Words::new();
	let mut chain = MarkovChain::new(caps);
	let mut rng = StdRng::seed_from_u64(3);

	assert!(matches!(chain.pick_start(&mut rng), Err(ChainError::NoValidStart { states: 0 })));

	chain.add(&s("done.")).unwrap();
	chain.add(&s("alone")).unwrap();
	assert!(!chain.has_valid_start());
	assert!(matches!(chain.pick_start(&mut rng), Err(ChainError::NoValidStart { states: 2 })));
}

#[test]
fn test_walk_of_length_one_is_its_start() {
	let chain = cat_dog_chain();
	let cat = chain.find(&s("cat")).unwrap();
	let mut rng = StdRng::seed_from_u64(1);

	let walk = chain.generate_walk(cat, 1, &mut rng).unwrap();
	assert_eq!(walk.ids(), &[cat]);
	assert_eq!(walk.payloads(), &[&s("cat")]);
	assert_eq!(walk.end(), WalkEnd::LengthCap);
}

#[test]
fn test_walk_stops_on_terminal_target() {
	let (caps, _) = Words::new();
	let mut chain = MarkovChain::new(caps);
	chain.observe(&s("the"), &s("end.")).unwrap();
	let start = chain.find(&s("the")).unwrap();
	let mut rng = StdRng::seed_from_u64(5);

	let walk = chain.generate_walk(start, 10, &mut rng).unwrap();
	assert_eq!(walk.payloads(), &[&s("the"), &s("end.")]);
	assert_eq!(walk.end(), WalkEnd::Terminal);
	assert!(!walk.is_truncated());
}

#[test]
fn test_walk_stops_on_dead_end() {
	let (caps, _) = Words::new();
	let mut chain = MarkovChain::new(caps);
	chain.observe(&s("a"), &s("b")).unwrap();
	let a = chain.find(&s("a")).unwrap();
	let mut rng = StdRng::seed_from_u64(5);

	let walk = chain.generate_walk(a, 10, &mut rng).unwrap();
	assert_eq!(walk.len(), 2);
	assert_eq!(walk.end(), WalkEnd::DeadEnd);
}

#[test]
fn test_text_scenario_walk_alternates() {
	let chain = cat_dog_chain();
	let cat = chain.find(&s("cat")).unwrap();
	let mut rng = StdRng::seed_from_u64(11);

	let walk = chain.generate_walk(cat, 4, &mut rng).unwrap();
	assert_eq!(walk.payloads(), &[&s("cat"), &s("dog"), &s("cat"), &s("dog")]);
	assert!(walk.is_truncated());
}

#[test]
fn test_zero_length_walk_is_rejected() {
	let chain = cat_dog_chain();
	let cat = chain.find(&s("cat")).unwrap();
	let mut rng = StdRng::seed_from_u64(0);

	let err = chain.generate_walk(cat, 0, &mut rng).unwrap_err();
	assert!(matches!(err, ChainError::InvalidParameter { parameter: "max_length", .. }));
}

#[test]
fn test_same_seed_same_walk() {
	let (caps, _) = Words::new();
	let mut chain = MarkovChain::new(caps);
	let corpus = ["a", "b", "c", "a", "c", "b", "a", "b", "b", "c", "end."];
	for pair in corpus.windows(2) {
		chain.observe(&s(pair[0]), &s(pair[1])).unwrap();
	}

	let run = |seed| {
		let mut rng = StdRng::seed_from_u64(seed);
		let start = chain.pick_start(&mut rng).unwrap();
		chain.generate_walk(start, 30, &mut rng).unwrap().ids().to_vec()
	};
	assert_eq!(run(2024), run(2024));
}

#[test]
fn test_render_uses_style() {
	let chain = cat_dog_chain();
	let cat = chain.find(&s("cat")).unwrap();
	let mut rng = StdRng::seed_from_u64(0);
	let walk = chain.generate_walk(cat, 3, &mut rng).unwrap();

	let style = RenderStyle::default().with_connector(" -> ").with_truncation_marker("...");
	let mut out = Vec::new();
	walk.render(chain.capabilities(), &style, &mut out).unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), "cat -> dog -> cat...\n");
}

#[test]
fn test_render_without_truncation_skips_marker() {
	let (caps, _) = Words::new();
	let mut chain = MarkovChain::new(caps);
	chain.observe(&s("hi"), &s("there.")).unwrap();
	let hi = chain.find(&s("hi")).unwrap();
	let mut rng = StdRng::seed_from_u64(0);
	let walk = chain.generate_walk(hi, 20, &mut rng).unwrap();

	let style = RenderStyle::default().with_truncation_marker(".");
	let mut out = Vec::new();
	walk.render(chain.capabilities(), &style, &mut out).unwrap();
	assert_eq!(String::from_utf8(out).unwrap(), "hi there.\n");
}
