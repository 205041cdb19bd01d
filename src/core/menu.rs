use crate::core::loader::load_courses;
use crate::core::{ConfigProvider, Course, CourseStore, Storage, StoreKind};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const STRUCTURE_PROMPT: &str =
    "Choose Data Structure:\n1. Vector\n2. HashTable\n3. Tree\nEnter your choice: ";
pub const ACTION_PROMPT: &str = "\nMenu:\n1. Load course data\n2. Print sorted courses\n3. Print course information\n9. Exit\nEnter your choice: ";
pub const COURSE_PROMPT: &str = "Enter course number: ";

pub const INVALID_STRUCTURE: &str = "Invalid data structure choice.";
pub const INVALID_CHOICE: &str = "Invalid choice.";
pub const NOT_FOUND: &str = "Course not found.";
pub const EXITING: &str = "Exiting program.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    PrintSorted,
    PrintCourse,
    Exit,
    Invalid,
}

impl Action {
    /// Anything that is not one of the menu numbers is `Invalid`.
    pub fn from_input(input: &str) -> Self {
        match input.parse::<u32>() {
            Ok(1) => Action::Load,
            Ok(2) => Action::PrintSorted,
            Ok(3) => Action::PrintCourse,
            Ok(9) => Action::Exit,
            _ => Action::Invalid,
        }
    }
}

/// Session state. The store lives only inside `ActionLoop`.
enum MenuState {
    ChooseStructure,
    ActionLoop(Box<dyn CourseStore>),
    Exit(Option<Box<dyn CourseStore>>),
}

/// Console front end: one structure choice, then actions until exit.
pub struct MenuController<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MenuController<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Runs a full session over `input`/`output`.
    ///
    /// Returns the store used by the session, or `None` when the structure
    /// choice was rejected or input ended before one was made.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<Option<Box<dyn CourseStore>>> {
        let mut state = MenuState::ChooseStructure;

        loop {
            state = match state {
                MenuState::ChooseStructure => self.choose_structure(&mut input, &mut output)?,
                MenuState::ActionLoop(store) => {
                    self.next_action(store, &mut input, &mut output)?
                }
                MenuState::Exit(store) => return Ok(store),
            };
        }
    }

    fn choose_structure<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<MenuState> {
        prompt(output, STRUCTURE_PROMPT)?;

        let Some(token) = read_token(input)? else {
            return Ok(MenuState::Exit(None));
        };

        let kind = token
            .parse::<u32>()
            .ok()
            .and_then(StoreKind::from_choice);

        match kind {
            Some(kind) => {
                tracing::debug!("Using {} store", kind);
                Ok(MenuState::ActionLoop(kind.build(self.config.bucket_count())))
            }
            None => {
                tracing::debug!("Rejected data structure choice '{}'", token);
                writeln!(output, "{}", INVALID_STRUCTURE)?;
                Ok(MenuState::Exit(None))
            }
        }
    }

    fn next_action<R: BufRead, W: Write>(
        &self,
        mut store: Box<dyn CourseStore>,
        input: &mut R,
        output: &mut W,
    ) -> Result<MenuState> {
        prompt(output, ACTION_PROMPT)?;

        let Some(token) = read_token(input)? else {
            // 輸入結束視同離開
            return Ok(MenuState::Exit(Some(store)));
        };

        let action = Action::from_input(&token);
        tracing::debug!("Dispatching {:?} on {} store", action, store.kind());

        match action {
            Action::Load => self.load(&mut *store),
            Action::PrintSorted => print_sorted(&*store, output)?,
            Action::PrintCourse => {
                prompt(output, COURSE_PROMPT)?;
                match read_token(input)? {
                    Some(course_number) => {
                        print_course(store.find(&course_number), output)?;
                    }
                    None => return Ok(MenuState::Exit(Some(store))),
                }
            }
            Action::Exit => {
                writeln!(output, "{}", EXITING)?;
                return Ok(MenuState::Exit(Some(store)));
            }
            Action::Invalid => writeln!(output, "{}", INVALID_CHOICE)?,
        }

        Ok(MenuState::ActionLoop(store))
    }

    fn load(&self, store: &mut dyn CourseStore) {
        let path = self.config.data_file();
        let courses = load_courses(&self.storage, path);
        store.replace_all(courses);
        tracing::debug!("Loaded {} courses from '{}' into {} store", store.len(), path, store.kind());
    }
}

pub fn print_sorted<W: Write + ?Sized>(store: &dyn CourseStore, output: &mut W) -> Result<()> {
    for course in store.sorted_courses() {
        writeln!(output, "{}: {}", course.course_number, course.title)?;
    }
    Ok(())
}

pub fn print_course<W: Write + ?Sized>(course: Option<&Course>, output: &mut W) -> Result<()> {
    match course {
        Some(course) => {
            writeln!(output, "Course: {}", course.title)?;
            writeln!(output, "Prerequisites: {}", course.prerequisites.join(" "))?;
        }
        None => writeln!(output, "{}", NOT_FOUND)?,
    }
    Ok(())
}

fn prompt<W: Write + ?Sized>(output: &mut W, text: &str) -> Result<()> {
    write!(output, "{}", text)?;
    output.flush()?;
    Ok(())
}

/// Next whitespace-delimited token, skipping blank lines.
/// Anything after the first token on a line is discarded. `None` at end of input.
fn read_token<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
    }
}
