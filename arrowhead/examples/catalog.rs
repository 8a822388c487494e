use std::fs::File;
use std::io::{self, Write};

use arrowhead::{auto_register_all, Element, Event, FocusState, Key, KeyListener};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("catalog.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut root = ui();
    if let Err(err) = auto_register_all(&mut root, &Default::default()) {
        log::error!("auto registration failed: {err}");
    }

    let mut focus = FocusState::new();
    focus.focus_first(&root);

    let mut listener = KeyListener::attach()?;
    let mut stdout = io::stdout();
    write!(stdout, "arrows move, q quits\r\n")?;
    print_focus(&mut stdout, &focus)?;

    'outer: loop {
        let raw_events = listener.poll(None)?;

        for event in focus.process_events(&raw_events, &mut root) {
            match event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => break 'outer,
                Event::Focus { .. } => print_focus(&mut stdout, &focus)?,
                _ => {}
            }
        }
    }

    listener.detach()
}

fn print_focus(out: &mut impl Write, focus: &FocusState) -> io::Result<()> {
    write!(out, "focused: {}\r\n", focus.focused().unwrap_or("-"))?;
    out.flush()
}

fn ui() -> Element {
    Element::col()
        .id("page")
        .ah_col()
        .child(
            Element::row()
                .id("nav")
                .ah_row()
                .ah_auto("")
                .child(Element::link("Home").id("home"))
                .child(Element::link("TV Shows").id("tv"))
                .child(Element::link("Movies").id("movies")),
        )
        .child(shelf("trending", &["Dune", "Arrival", "Heat"]))
        .child(shelf("top-rated", &["Alien", "Ran", "Up"]))
}

fn shelf(name: &str, titles: &[&str]) -> Element {
    Element::box_()
        .id(name)
        .child(Element::text(name))
        .child(
            Element::row()
                .id(format!("{name}-row"))
                .ah_flex()
                .children(titles.iter().map(|title| {
                    Element::box_()
                        .id(format!("{name}-{}", title.to_lowercase()))
                        .ah_item()
                        .child(Element::text(*title))
                })),
        )
}
