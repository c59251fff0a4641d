// Interactive task operations: view, add, delete and the menu loop

use crate::console::Console;
use crate::store::TaskStore;
use crate::task::Task;
use colored::Colorize;
use eyre::Result;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, info};

pub const MSG_EMPTY: &str = "Task list is empty.";
pub const MSG_NOTHING_TO_DELETE: &str = "No tasks to delete.";
pub const MSG_NOT_A_NUMBER: &str = "Error: enter a valid number.";
pub const MSG_OUT_OF_RANGE: &str = "Invalid task number.";
pub const MSG_DELETED: &str = "Task deleted.";
pub const MSG_ADDED: &str = "Task added.";
pub const MSG_UNKNOWN_CHOICE: &str = "Unknown choice.";

const MENU: &str = "\nTask manager\n1. View tasks\n2. Add task\n3. Delete task\n4. Exit";

/// Result of a delete attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// List was empty, nothing was asked
    Empty,
    /// Input ended before a number was given
    Cancelled,
    /// Input was not an integer
    NotANumber,
    /// Integer outside 1..=len
    OutOfRange,
    /// Task removed and list saved
    Deleted(Task),
}

/// Owns the in-memory task list and applies user operations to it
///
/// Every mutation is followed by a full save through the store.
pub struct TaskManager<R, W> {
    store: TaskStore,
    tasks: Vec<Task>,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> TaskManager<R, W> {
    pub fn new(store: TaskStore, tasks: Vec<Task>, console: Console<R, W>) -> Self {
        Self { store, tasks, console }
    }

    /// Load the list from `store` and wrap it
    pub fn open(store: TaskStore, console: Console<R, W>) -> Result<Self> {
        let tasks = store.load()?;
        Ok(Self::new(store, tasks, console))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Print every task numbered from 1, or the empty-list message
    pub fn view(&mut self) -> Result<()> {
        if self.tasks.is_empty() {
            return self.console.say(MSG_EMPTY);
        }

        for (i, task) in self.tasks.iter().enumerate() {
            self.console.say(format!("{}. {}", i + 1, task))?;
        }
        Ok(())
    }

    /// Prompt for title and priority, then append and save
    ///
    /// Returns `None` when input ends before both values are known.
    pub fn add(&mut self) -> Result<Option<Task>> {
        self.add_with(None, None)
    }

    /// Like `add`, prompting only for the values not supplied
    pub fn add_with(&mut self, title: Option<String>, priority: Option<String>) -> Result<Option<Task>> {
        let title = match title {
            Some(t) => t,
            None => match self.console.ask("Enter task title: ")? {
                Some(t) => t,
                None => return Ok(None),
            },
        };

        let priority = match priority {
            Some(p) => p,
            None => match self.console.ask("Enter priority (High/Medium/Low): ")? {
                Some(p) => p,
                None => return Ok(None),
            },
        };

        let task = Task::new(title, priority);
        self.push(task.clone())?;
        self.console.say(MSG_ADDED.green())?;
        Ok(Some(task))
    }

    /// Append a task and save without any prompting
    pub fn push(&mut self, task: Task) -> Result<()> {
        info!(title = %task.title, priority = %task.priority, "Adding task");
        self.tasks.push(task);
        self.store.save(&self.tasks)
    }

    /// Show the list, prompt for a 1-based number and remove that task
    pub fn delete(&mut self) -> Result<DeleteOutcome> {
        if self.tasks.is_empty() {
            self.console.say(MSG_NOTHING_TO_DELETE)?;
            return Ok(DeleteOutcome::Empty);
        }

        self.view()?;

        match self.console.ask("Enter the number of the task to delete: ")? {
            Some(input) => self.delete_input(&input),
            None => Ok(DeleteOutcome::Cancelled),
        }
    }

    /// Remove the task named by `input`, reporting bad input on the console
    ///
    /// The list and the storage file are untouched unless a task is removed.
    pub fn delete_input(&mut self, input: &str) -> Result<DeleteOutcome> {
        if self.tasks.is_empty() {
            self.console.say(MSG_NOTHING_TO_DELETE)?;
            return Ok(DeleteOutcome::Empty);
        }

        let index = match parse_task_number(input, self.tasks.len()) {
            Ok(index) => index,
            Err(outcome) => {
                debug!(input, ?outcome, "delete_input: rejected");
                let message = match outcome {
                    DeleteOutcome::NotANumber => MSG_NOT_A_NUMBER,
                    _ => MSG_OUT_OF_RANGE,
                };
                self.console.say(message.red())?;
                return Ok(outcome);
            }
        };

        let removed = self.tasks.remove(index);
        info!(title = %removed.title, number = index + 1, "Deleting task");
        self.store.save(&self.tasks)?;
        self.console.say(MSG_DELETED.green())?;
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Interactive menu loop; returns on "4" or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.say(MENU.bold())?;
            let Some(choice) = self.console.ask("Choose an action: ")? else {
                debug!("run: end of input");
                return Ok(());
            };

            match choice.trim() {
                "1" => self.view()?,
                "2" => {
                    if self.add()?.is_none() {
                        return Ok(());
                    }
                }
                "3" => {
                    if self.delete()? == DeleteOutcome::Cancelled {
                        return Ok(());
                    }
                }
                "4" => {
                    self.console.say("Goodbye!")?;
                    return Ok(());
                }
                _ => self.console.say(MSG_UNKNOWN_CHOICE.red())?,
            }
        }
    }
}

/// Convert a 1-based task number into a list index
fn parse_task_number(input: &str, len: usize) -> std::result::Result<usize, DeleteOutcome> {
    match input.trim().parse::<i64>() {
        Ok(n) if n >= 1 && (n as u64) <= len as u64 => Ok(n as usize - 1),
        Ok(_) => Err(DeleteOutcome::OutOfRange),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(DeleteOutcome::OutOfRange),
            _ => Err(DeleteOutcome::NotANumber),
        },
    }
}
