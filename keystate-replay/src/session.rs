//! Replays a parsed script through an [`InputHub`]
//!
//! Every source gets a reporting observer that writes the state of the
//! source's trackers after each event, and consumes typed notifications so
//! nothing would be inserted as text.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use keystate_core::{
    Error as CoreError, InputEvent, InputHub, KeySpec, Propagation, SourceId, TrackerId,
};
use log::{debug, info};

use crate::parser::{Command, Script, Statement};
use crate::ScriptError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    /// Render keys with their location, e.g. `Shift(Left)`
    pub with_location: bool,
}

type TrackerNames = Rc<RefCell<HashMap<TrackerId, String>>>;
type Report = Rc<RefCell<Vec<String>>>;

pub struct Session {
    hub: InputHub,
    options: ReplayOptions,
    sources: HashMap<String, SourceId>,
    // Declaration order, for `show`
    trackers: Vec<(String, TrackerId)>,
    tracker_names: TrackerNames,
    report: Report,
}

impl Session {
    pub fn new(options: ReplayOptions) -> Self {
        Self {
            hub: InputHub::new(),
            options,
            sources: HashMap::new(),
            trackers: Vec::new(),
            tracker_names: Rc::new(RefCell::new(HashMap::new())),
            report: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Report lines produced so far
    pub fn output(&self) -> Vec<String> {
        self.report.borrow().clone()
    }

    pub fn run(&mut self, script: &Script) -> Result<(), ScriptError> {
        for statement in &script.statements {
            self.execute(statement)?;
        }
        info!("Replayed {} command(s)", script.statements.len());
        Ok(())
    }

    pub fn execute(&mut self, statement: &Statement) -> Result<(), ScriptError> {
        let line = statement.line;
        debug!("Line {}: {:?}", line, statement.command);

        match &statement.command {
            Command::Sources(names) => {
                for name in names {
                    self.add_source(line, name)?;
                }
            }
            Command::Trackers(names) => {
                for name in names {
                    self.add_tracker(line, name)?;
                }
            }
            Command::Attach { tracker, sources } => {
                let tracker = self.tracker_id(line, tracker)?;
                let sources = sources
                    .iter()
                    .map(|name| self.source_id(line, name))
                    .collect::<Result<Vec<_>, _>>()?;
                self.hub
                    .attach(tracker, &sources)
                    .map_err(|e| core_error(line, e))?;
            }
            Command::Focus(target) => {
                let target = match target {
                    Some(name) => Some(self.source_id(line, name)?),
                    None => None,
                };
                self.hub
                    .transfer_focus(target)
                    .map_err(|e| core_error(line, e))?;
            }
            Command::Press(keys) => self.send_keys(line, keys, InputEvent::KeyPressed)?,
            Command::Release(keys) => self.send_keys(line, keys, InputEvent::KeyReleased)?,
            Command::Type(keys) => self.send_keys(line, keys, InputEvent::KeyTyped)?,
            Command::Clear(name) => {
                let id = self.tracker_id(line, name)?;
                self.hub
                    .tracker_mut(id)
                    .map_err(|e| core_error(line, e))?
                    .clear();
                self.push(format!("{} cleared", name));
            }
            Command::Show(Some(name)) => {
                let id = self.tracker_id(line, name)?;
                let text = self.render(id, line)?;
                self.push(format!("{} = \"{}\"", name, text));
            }
            Command::Show(None) => {
                for (name, id) in self.trackers.clone() {
                    let text = self.render(id, line)?;
                    self.push(format!("{} = \"{}\"", name, text));
                }
            }
            Command::Expect { tracker, text } => {
                let id = self.tracker_id(line, tracker)?;
                let actual = self
                    .hub
                    .tracker(id)
                    .map_err(|e| core_error(line, e))?
                    .render_text();
                if actual != *text {
                    return Err(ScriptError::ExpectationFailed {
                        line,
                        tracker: tracker.clone(),
                        expected: text.clone(),
                        actual,
                    });
                }
            }
        }
        Ok(())
    }

    fn add_source(&mut self, line: usize, name: &str) -> Result<(), ScriptError> {
        if self.sources.contains_key(name) {
            return Err(ScriptError::Duplicate {
                line,
                kind: "source",
                name: name.to_string(),
            });
        }

        let source = self.hub.add_source(name);
        let observer = self.hub.add_observer(Box::new(report_observer(
            Rc::clone(&self.tracker_names),
            Rc::clone(&self.report),
            self.options,
        )));
        self.hub
            .attach_observer(observer, &[source])
            .map_err(|e| core_error(line, e))?;
        self.sources.insert(name.to_string(), source);
        Ok(())
    }

    fn add_tracker(&mut self, line: usize, name: &str) -> Result<(), ScriptError> {
        if self.trackers.iter().any(|(existing, _)| existing == name) {
            return Err(ScriptError::Duplicate {
                line,
                kind: "tracker",
                name: name.to_string(),
            });
        }

        let tracker = self.hub.add_tracker();
        self.tracker_names
            .borrow_mut()
            .insert(tracker, name.to_string());
        self.trackers.push((name.to_string(), tracker));
        Ok(())
    }

    fn send_keys(
        &mut self,
        line: usize,
        keys: &[KeySpec],
        event: fn(keystate_core::KeyRecord) -> InputEvent,
    ) -> Result<(), ScriptError> {
        for key in keys {
            let propagation = self
                .hub
                .dispatch_to_focused(event(key.to_record()))
                .map_err(|e| match e {
                    CoreError::NoFocusOwner => ScriptError::NoFocus { line },
                    other => core_error(line, other),
                })?;
            if propagation.is_consumed() {
                debug!("Line {}: {:?} consumed", line, key);
            }
        }
        Ok(())
    }

    fn render(&self, id: TrackerId, line: usize) -> Result<String, ScriptError> {
        let tracker = self.hub.tracker(id).map_err(|e| core_error(line, e))?;
        Ok(if self.options.with_location {
            tracker.render_text_with_location()
        } else {
            tracker.render_text()
        })
    }

    fn source_id(&self, line: usize, name: &str) -> Result<SourceId, ScriptError> {
        self.sources
            .get(name)
            .copied()
            .ok_or_else(|| ScriptError::Undefined {
                line,
                kind: "source",
                name: name.to_string(),
            })
    }

    fn tracker_id(&self, line: usize, name: &str) -> Result<TrackerId, ScriptError> {
        self.trackers
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, id)| *id)
            .ok_or_else(|| ScriptError::Undefined {
                line,
                kind: "tracker",
                name: name.to_string(),
            })
    }

    fn push(&self, line: String) {
        self.report.borrow_mut().push(line);
    }
}

fn core_error(line: usize, source: CoreError) -> ScriptError {
    ScriptError::Core { line, source }
}

/// Observer that writes one report line per tracker on the notified source
fn report_observer(
    names: TrackerNames,
    report: Report,
    options: ReplayOptions,
) -> impl FnMut(&InputHub, SourceId, &InputEvent) -> Propagation {
    move |hub: &InputHub, source: SourceId, event: &InputEvent| {
        let source_name = hub.source_name(source).unwrap_or("?");
        let description = describe(hub, event);
        let trackers = hub.trackers_on(source).unwrap_or_default();

        let mut report = report.borrow_mut();
        if trackers.is_empty() {
            report.push(format!("[{}] {}", source_name, description));
        }
        for id in trackers {
            let Ok(tracker) = hub.tracker(id) else {
                continue;
            };
            let text = if options.with_location {
                tracker.render_text_with_location()
            } else {
                tracker.render_text()
            };
            let known = names.borrow();
            let tracker_name = known.get(&id).map(String::as_str).unwrap_or("?");
            report.push(format!(
                "[{}] {}: {} = \"{}\"",
                source_name, description, tracker_name, text
            ));
        }

        match event {
            InputEvent::KeyTyped(_) => Propagation::Consume,
            _ => Propagation::Continue,
        }
    }
}

fn describe(hub: &InputHub, event: &InputEvent) -> String {
    let opposite_name = |opposite: Option<SourceId>| {
        opposite
            .and_then(|id| hub.source_name(id).ok())
            .unwrap_or("none")
            .to_string()
    };

    let (action, opposite) = match event {
        InputEvent::KeyPressed(_) => ("pressed", None),
        InputEvent::KeyReleased(_) => ("released", None),
        InputEvent::KeyTyped(_) => ("typed", None),
        InputEvent::FocusLost(focus) => ("focus lost to", focus.opposite),
        InputEvent::FocusGained(focus) => ("focus gained from", focus.opposite),
    };

    match event.key() {
        Some(record) => format!("{} {}", action, record.key_text_with_location()),
        None => format!("{} {}", action, opposite_name(opposite)),
    }
}
