use padlisten::backends::virtual_input::VirtualGamepad;
use padlisten::{Button, EventKind, GamepadPoller, PadConfig, PollStatus, Toggle};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const SCRIPT: &str = r#"[
    {"buttons": ["a"]},
    {"buttons": ["a"]},
    {"buttons": ["a", "left_bumper"]},
    {"buttons": ["left_bumper"], "right_trigger": 0.8},
    {"right_trigger": 0.8},
    {}
]"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = PadConfig::from_toml_str("name = \"demo\"\nlog_events = true\n")
        .expect("demo config");
    let source = VirtualGamepad::from_json("virtual:demo", "Demo Virtual Gamepad", SCRIPT)
        .expect("demo script")
        .with_trigger_threshold(config.trigger_threshold)
        .expect("threshold already validated by config");

    let mut poller = GamepadPoller::from_config(source, &config);
    let pad = poller.registry_mut();

    pad.subscribe(Button::A, EventKind::Pressed, |_| println!("(Demo) A down: claw closing"));
    pad.subscribe(Button::A, EventKind::Released, |_| println!("(Demo) A up: claw stopped"));
    pad.subscribe(Button::RightTrigger, EventKind::Held, |_| println!("(Demo) RT held: intake running"));

    let toggle = Toggle::new()
        .on_activate(|| println!("(Demo) slow mode on"))
        .on_deactivate(|| println!("(Demo) slow mode off"));
    pad.toggle(Button::LeftBumper, toggle);

    loop {
        match poller.poll_once() {
            Ok(PollStatus::Updated) => {}
            Ok(_) => break,
            Err(e) => eprintln!("(Demo) {e}"),
        }
        // Sleep a touch so the log reads like a real poll loop
        std::thread::sleep(Duration::from_millis(20));
    }
}
