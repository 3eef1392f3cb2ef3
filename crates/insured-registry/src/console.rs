//! Interactive console for the registry.
//!
//! The console owns the [`Registry`] for the whole session and drives it from
//! a numbered menu. It reads from any [`BufRead`] and writes to any
//! [`Write`], so a session can be scripted in tests exactly as a user would
//! type it.
//!
//! Rejected input and an empty registry are reported to the user and the
//! menu is shown again. End of input ends the session cleanly.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::config::{Config, DisplayConfig};
use crate::error::{Error, Result};
use crate::input::{InputValidator, PHONE_HINT};
use crate::person::InsuredPerson;
use crate::registry::{self, Registry};

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a new insured person.
    Add,
    /// List all insured persons.
    List,
    /// Search insured persons.
    Search,
    /// Leave the program.
    Exit,
}

impl MenuChoice {
    /// Parse the user's menu selection.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Search),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven console session.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    registry: Registry,
    validator: InputValidator,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console with an empty registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the input configuration is invalid.
    pub fn new(input: R, output: W, config: &Config) -> Result<Self> {
        Self::with_registry(input, output, config, Registry::new())
    }

    /// Create a console over an existing registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the input configuration is invalid.
    pub fn with_registry(input: R, output: W, config: &Config, registry: Registry) -> Result<Self> {
        Ok(Self {
            input,
            output,
            registry,
            validator: InputValidator::new(&config.input)?,
            display: config.display.clone(),
        })
    }

    /// The registry managed by this session.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// End the session and hand back the registry.
    #[must_use]
    pub fn into_registry(self) -> Registry {
        self.registry
    }

    /// Run the menu loop until the user exits or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails or reading input
    /// fails for any reason other than end of input.
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(Error::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    debug!("Input closed, ending session");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        info!(persons = self.registry.len(), "Session finished");
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n--- Evidence pojištěnců ---")?;
        writeln!(self.output, "1. Přidat nového pojištěnce")?;
        writeln!(self.output, "2. Vypsat všechny pojištěnce")?;
        writeln!(self.output, "3. Vyhledat pojištěnce")?;
        writeln!(self.output, "4. Konec\n")?;

        let line = self.prompt("Zadejte možnost (1–4): ")?;
        let choice = MenuChoice::parse(&line);
        debug!(?choice, "Menu selection");

        match choice {
            Some(MenuChoice::Add) => {
                writeln!(self.output, "\n--- Přidat nového pojištěnce ---")?;
                self.add_person()?;
            }
            Some(MenuChoice::List) => {
                writeln!(self.output, "\n--- Vypsat všechny pojištěnce ---")?;
                self.list_persons()?;
            }
            Some(MenuChoice::Search) => {
                writeln!(self.output, "\n--- Vyhledat pojištěnce ---")?;
                self.search_persons()?;
            }
            Some(MenuChoice::Exit) => {
                self.clear()?;
                writeln!(self.output, "\nUkončuji program...")?;
                return Ok(Flow::Exit);
            }
            None => {
                self.clear()?;
                writeln!(self.output, "Neplatná volba. Zkuste to znovu.\n")?;
            }
        }

        Ok(Flow::Continue)
    }

    fn add_person(&mut self) -> Result<()> {
        let Some(first_name) = self.ask_text("first_name", "Zadejte jméno: ")? else {
            return Ok(());
        };
        let Some(last_name) = self.ask_text("last_name", "Zadejte příjmení: ")? else {
            return Ok(());
        };
        let Some(age) = self.ask_age("Zadejte věk: ")? else {
            return Ok(());
        };
        let Some(phone) = self.ask_phone("Zadejte telefonní číslo: ")? else {
            return Ok(());
        };

        writeln!(
            self.output,
            "Pojištěnec {first_name} {last_name} byl úspěšně přidán."
        )?;
        self.registry
            .add(InsuredPerson::new(first_name, last_name, age, phone));
        info!(total = self.registry.len(), "Insured person added");

        self.pause()
    }

    fn list_persons(&mut self) -> Result<()> {
        match self.registry.list_all() {
            Ok(persons) => {
                writeln!(self.output, "\n--- Seznam pojištěnců ---")?;
                for person in persons {
                    writeln!(self.output, "{person}")?;
                }
            }
            Err(Error::EmptyRegistry) => {
                self.clear()?;
                writeln!(self.output, "Seznam pojištěnců je prázdný.")?;
            }
            Err(err) => return Err(err),
        }

        self.pause()
    }

    fn search_persons(&mut self) -> Result<()> {
        if self.registry.is_empty() {
            self.clear()?;
            writeln!(self.output, "\nNení evidován žádný pojištěnec.")?;
            return self.pause();
        }

        let query = self
            .ask_text("query", "Zadejte jméno, příjmení nebo telefon: ")?
            .filter(|query| !registry::keywords(query).is_empty());
        let Some(query) = query else {
            writeln!(self.output, "Nebyl zadán žádný hledaný výraz.")?;
            return self.pause();
        };

        let results = self.registry.search_by_text(&query);

        writeln!(self.output, "\n--- Výsledek vyhledávání ---")?;
        if results.is_empty() {
            writeln!(self.output, "Nenalezen žádný pojištěnec.")?;
        } else {
            for person in results {
                writeln!(self.output, "{person}")?;
            }
        }

        self.pause()
    }

    /// Ask for a text field. Rejections clear the screen first.
    fn ask_text(&mut self, field: &'static str, prompt: &str) -> Result<Option<String>> {
        let line = self.prompt(prompt)?;
        match self.validator.text(field, &line) {
            Ok(text) => Ok(Some(text)),
            Err(err) => {
                self.clear()?;
                self.reject(err)?;
                Ok(None)
            }
        }
    }

    fn ask_age(&mut self, prompt: &str) -> Result<Option<u32>> {
        let line = self.prompt(prompt)?;
        match self.validator.age(&line) {
            Ok(age) => Ok(Some(age)),
            Err(err) => {
                self.reject(err)?;
                Ok(None)
            }
        }
    }

    /// Ask for a phone number. Any rejection ends with the digits-only hint.
    fn ask_phone(&mut self, prompt: &str) -> Result<Option<String>> {
        let phone = self
            .ask_text("phone", prompt)?
            .filter(|phone| self.validator.phone(phone).is_ok());

        if phone.is_none() {
            writeln!(self.output, "{PHONE_HINT}")?;
        }
        Ok(phone)
    }

    /// Show a validation message to the user; anything else is propagated.
    fn reject(&mut self, err: Error) -> Result<()> {
        match err {
            Error::Validation { field, message } => {
                debug!(field, %message, "Input rejected");
                writeln!(self.output, "{message}")?;
                Ok(())
            }
            other => Err(other),
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }

        // Terminals in a legacy code page send bytes that aren't UTF-8.
        Ok(String::from_utf8(bytes).unwrap_or_else(|err| {
            debug!("Input is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }))
    }

    fn pause(&mut self) -> Result<()> {
        if !self.display.pause_after_action {
            return Ok(());
        }
        self.prompt("\nPokračujte stisknutím klávesy Enter...")?;
        self.clear()
    }

    fn clear(&mut self) -> Result<()> {
        if self.display.clear_lines > 0 {
            write!(self.output, "{}", "\n".repeat(self.display.clear_lines))?;
        }
        Ok(())
    }
}
