use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use super::{Config, Event, EventKind};

struct DebounceState {
	last_seen: Instant,
	kind: EventKind,
}

pub(crate) fn process_events<F>(
	raw_rx: Receiver<notify::Result<notify::Event>>,
	file_name: OsString,
	config: Config,
	handler: F,
) where
	F: Fn(Event),
{
	let mut pending: HashMap<PathBuf, DebounceState> = HashMap::new();

	let tick_rate = if config.debounce < Duration::from_millis(50) {
		config.debounce.max(Duration::from_millis(1))
	} else {
		config.debounce / 5
	};

	loop {
		match raw_rx.recv_timeout(tick_rate) {
			Ok(Ok(event)) => handle_raw_event(event, &mut pending, &file_name, &config),
			Ok(Err(e)) => tracing::error!("Notify error: {:?}", e),
			Err(RecvTimeoutError::Timeout) => {}
			Err(RecvTimeoutError::Disconnected) => break,
		}
		flush_pending(&mut pending, &handler, &config);
	}
}

fn handle_raw_event(
	event: notify::Event,
	pending: &mut HashMap<PathBuf, DebounceState>,
	file_name: &OsString,
	config: &Config,
) {
	use notify::EventKind as NK;
	let kind = match event.kind {
		NK::Create(_) => EventKind::Create,
		NK::Modify(_) => EventKind::Modify,
		NK::Remove(_) => EventKind::Remove,
		_ => return,
	};

	for path in event.paths {
		if path.file_name() != Some(file_name.as_os_str()) {
			continue;
		}

		pending
			.entry(path)
			.and_modify(|state| {
				state.last_seen = Instant::now();

				if !config.coalesce {
					state.kind = kind;
					return;
				}

				match (state.kind, kind) {
					(EventKind::Create, EventKind::Modify) => { /* Keep Create */ }
					(EventKind::Remove, EventKind::Modify) => {
						// Ignore noise
					}
					_ => {
						state.kind = kind;
					}
				}
			})
			.or_insert(DebounceState {
				last_seen: Instant::now(),
				kind,
			});
	}
}

fn flush_pending<F>(pending: &mut HashMap<PathBuf, DebounceState>, handler: &F, config: &Config)
where
	F: Fn(Event),
{
	let now = Instant::now();
	let settled: Vec<PathBuf> = pending
		.iter()
		.filter(|(_, state)| now.duration_since(state.last_seen) >= config.debounce)
		.map(|(path, _)| path.clone())
		.collect();

	for path in settled {
		if let Some(state) = pending.remove(&path) {
			handler(Event {
				path,
				kind: state.kind,
			});
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use notify::event::{CreateKind, DataChange, ModifyKind, RemoveKind};

	fn raw(kind: notify::EventKind, path: &str) -> notify::Event {
		notify::Event::new(kind).add_path(PathBuf::from(path))
	}

	#[test]
	fn test_coalesces_create_then_modify() {
		let mut pending = HashMap::new();
		let name = OsString::from("app.json");
		let config = Config::default();

		handle_raw_event(
			raw(notify::EventKind::Create(CreateKind::File), "/tmp/app.json"),
			&mut pending,
			&name,
			&config,
		);
		handle_raw_event(
			raw(
				notify::EventKind::Modify(ModifyKind::Data(DataChange::Content)),
				"/tmp/app.json",
			),
			&mut pending,
			&name,
			&config,
		);

		assert_eq!(pending.len(), 1);
		assert_eq!(pending[&PathBuf::from("/tmp/app.json")].kind, EventKind::Create);
	}

	#[test]
	fn test_ignores_other_files() {
		let mut pending = HashMap::new();
		let name = OsString::from("app.json");

		handle_raw_event(
			raw(notify::EventKind::Remove(RemoveKind::File), "/tmp/other.json"),
			&mut pending,
			&name,
			&Config::default(),
		);

		assert!(pending.is_empty());
	}

	#[test]
	fn test_flush_waits_for_quiet_period() {
		let mut pending = HashMap::new();
		let config = Config {
			debounce: Duration::from_secs(60),
			coalesce: true,
		};
		pending.insert(
			PathBuf::from("/tmp/app.json"),
			DebounceState {
				last_seen: Instant::now(),
				kind: EventKind::Modify,
			},
		);

		let delivered = std::cell::RefCell::new(Vec::new());
		flush_pending(&mut pending, &|event: Event| delivered.borrow_mut().push(event), &config);
		assert!(delivered.borrow().is_empty());
		assert_eq!(pending.len(), 1);
	}
}
