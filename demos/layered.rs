/* demos/layered.rs */

use std::error::Error;
use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use strata::{ConfigView, Configuration, EnvSource, FileSource, MemorySource};

fn main() -> Result<(), Box<dyn Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("app.json");
	fs::write(
		&path,
		r#"{
			"Server": { "Host": "0.0.0.0", "Port": 8080 },
			"Features": ["metrics", "tracing"]
		}"#,
	)?;

	let mut config = Configuration::new();
	config
		.add(
			MemorySource::new()
				.with("Server:Host", "127.0.0.1")
				.with("Server:Port", "80")
				.with("Server:Timeout", "30"),
		)?
		.add(FileSource::new(&path))?
		.add(EnvSource::new().with_prefix("DEMO_").with_vars([("DEMO_SERVER__PORT", "9090")]))?;

	println!("Merged configuration:");
	for (path, value) in config.entries(false) {
		if let Some(value) = value {
			println!("  {path} = {value}");
		}
	}

	let server = config.section("server");
	println!(
		"Server {}:{} (timeout {}s)",
		server.get("host").unwrap_or_default(),
		server.get("port").unwrap_or_default(),
		server.get("timeout").unwrap_or_default(),
	);

	let reloads = Arc::new(AtomicUsize::new(0));
	let counter = reloads.clone();
	let _registration = config.on_reload(move || {
		counter.fetch_add(1, Ordering::SeqCst);
	});

	fs::write(&path, r#"{ "Server": { "Host": "10.0.0.1" } }"#)?;
	config.reload()?;

	println!(
		"After reload: host={} features={:?} reloads={}",
		config.get("Server:Host").unwrap_or_default(),
		config.section("Features").child_keys(),
		reloads.load(Ordering::SeqCst),
	);

	config.dispose()?;
	Ok(())
}
