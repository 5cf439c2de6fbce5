//! Interactive text menu over an `OrderedTree`
//!
//! The session reads a numeric choice, then an integer operand where the
//! action needs one, and re-prompts on anything that does not parse.
//! Input and output are generic so the loop can be driven from tests.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{Key, OrderedTree};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Menu entries in display order; the choice number is the position plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Insert,
    Delete,
    Search,
    InOrder,
    LevelOrder,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Insert,
        MenuAction::Delete,
        MenuAction::Search,
        MenuAction::InOrder,
        MenuAction::LevelOrder,
        MenuAction::Exit,
    ];

    /// Parse a menu selection such as `"3\n"`.
    pub fn parse(input: &str) -> ApplicationResult<Self> {
        let trimmed = input.trim();
        let choice: Key = trimmed
            .parse()
            .map_err(|_| ApplicationError::InvalidInput(trimmed.to_string()))?;
        Self::from_choice(choice).ok_or(ApplicationError::InvalidChoice(choice))
    }

    pub fn from_choice(choice: Key) -> Option<Self> {
        usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    pub fn choice(&self) -> usize {
        Self::ALL
            .iter()
            .position(|action| action == self)
            .map_or(0, |idx| idx + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Insert => "Insert a value",
            MenuAction::Delete => "Delete a value",
            MenuAction::Search => "Search for a value",
            MenuAction::InOrder => "Inorder traversal",
            MenuAction::LevelOrder => "Level-order traversal",
            MenuAction::Exit => "Exit",
        }
    }

    /// Prompt for the operand, None for actions that take no operand.
    pub fn operand_prompt(&self) -> Option<&'static str> {
        match self {
            MenuAction::Insert => Some("Enter value to insert: "),
            MenuAction::Delete => Some("Enter value to delete: "),
            MenuAction::Search => Some("Enter value to search for: "),
            _ => None,
        }
    }

    /// Pair the action with its operand. None when an operand is required but missing.
    pub fn command(&self, operand: Option<Key>) -> Option<MenuCommand> {
        match (self, operand) {
            (MenuAction::Insert, Some(key)) => Some(MenuCommand::Insert(key)),
            (MenuAction::Delete, Some(key)) => Some(MenuCommand::Delete(key)),
            (MenuAction::Search, Some(key)) => Some(MenuCommand::Search(key)),
            (MenuAction::InOrder, _) => Some(MenuCommand::InOrder),
            (MenuAction::LevelOrder, _) => Some(MenuCommand::LevelOrder),
            (MenuAction::Exit, _) => Some(MenuCommand::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.choice(), self.label())
    }
}

/// A fully specified request against the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Insert(Key),
    Delete(Key),
    Search(Key),
    InOrder,
    LevelOrder,
    Exit,
}

/// What happened when a command was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Inserted(Key),
    AlreadyPresent(Key),
    Deleted(Key),
    NotDeleted(Key),
    Found(Key),
    NotFound(Key),
    InOrder(Vec<Key>),
    LevelOrder(Vec<Key>),
    Exit,
}

impl Outcome {
    /// User-facing text; traversal keys are joined with `separator`.
    pub fn message(&self, separator: &str) -> String {
        let join = |keys: &[Key]| {
            keys.iter()
                .map(Key::to_string)
                .collect::<Vec<_>>()
                .join(separator)
        };
        match self {
            Outcome::Inserted(_) => "Value inserted.".to_string(),
            Outcome::AlreadyPresent(_) => "Value already present.".to_string(),
            Outcome::Deleted(_) => "Value deleted.".to_string(),
            Outcome::NotDeleted(_) => "Value not found.".to_string(),
            Outcome::Found(_) => "Value found in the tree.".to_string(),
            Outcome::NotFound(_) => "Value NOT found.".to_string(),
            Outcome::InOrder(keys) => format!("Inorder traversal:\n{}", join(keys)),
            Outcome::LevelOrder(keys) => format!("Level-order traversal:\n{}", join(keys)),
            Outcome::Exit => "Exiting program...".to_string(),
        }
    }
}

/// Map a command onto the tree's core operations.
#[instrument(level = "debug", skip(tree))]
pub fn apply(tree: &mut OrderedTree, command: MenuCommand) -> Outcome {
    match command {
        MenuCommand::Insert(key) => {
            if tree.insert(key) {
                Outcome::Inserted(key)
            } else {
                Outcome::AlreadyPresent(key)
            }
        }
        MenuCommand::Delete(key) => {
            if tree.remove(key) {
                Outcome::Deleted(key)
            } else {
                Outcome::NotDeleted(key)
            }
        }
        MenuCommand::Search(key) => {
            if tree.search(key) {
                Outcome::Found(key)
            } else {
                Outcome::NotFound(key)
            }
        }
        MenuCommand::InOrder => Outcome::InOrder(tree.in_order()),
        MenuCommand::LevelOrder => Outcome::LevelOrder(tree.level_order()),
        MenuCommand::Exit => Outcome::Exit,
    }
}

/// Interactive menu loop owning the tree it manipulates.
pub struct MenuSession<R, W> {
    tree: OrderedTree,
    settings: Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(settings: Settings, input: R, output: W) -> Self {
        Self::with_tree(OrderedTree::new(), settings, input, output)
    }

    pub fn with_tree(tree: OrderedTree, settings: Settings, input: R, output: W) -> Self {
        Self {
            tree,
            settings,
            input,
            output,
        }
    }

    pub fn tree(&self) -> &OrderedTree {
        &self.tree
    }

    pub fn into_parts(self) -> (OrderedTree, W) {
        (self.tree, self.output)
    }

    /// Run until the user picks Exit or input reaches end of file.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> ApplicationResult<()> {
        loop {
            self.clear()?;
            self.draw_menu()?;

            let Some(line) = self.read_line()? else {
                debug!("input closed at menu prompt");
                break;
            };

            let action = match MenuAction::parse(&line) {
                Ok(action) => action,
                Err(e) => {
                    debug!("rejected menu selection: {}", e);
                    // an out-of-range number gets a fresh screen, unparseable text does not
                    if let ApplicationError::InvalidChoice(_) = e {
                        self.clear()?;
                        self.say("Invalid choice.")?;
                    } else {
                        self.say("Invalid input.")?;
                    }
                    self.pause()?;
                    continue;
                }
            };

            self.clear()?;
            let operand = match action.operand_prompt() {
                Some(prompt) => match self.read_operand(prompt)? {
                    Some(key) => Some(key),
                    None => break,
                },
                None => None,
            };
            let Some(command) = action.command(operand) else {
                continue;
            };

            let outcome = apply(&mut self.tree, command);
            let message = outcome.message(&self.settings.separator);
            self.say(&message)?;
            if outcome == Outcome::Exit {
                break;
            }
            self.pause()?;
        }
        Ok(())
    }

    fn draw_menu(&mut self) -> ApplicationResult<()> {
        writeln!(self.output, "--- Binary Search Tree Menu ---").with_context("draw menu")?;
        for action in MenuAction::ALL {
            writeln!(self.output, "{}", action).with_context("draw menu")?;
        }
        self.prompt("Enter your choice: ")
    }

    /// Keep asking until an integer arrives; None on end of input.
    fn read_operand(&mut self, prompt: &str) -> ApplicationResult<Option<Key>> {
        loop {
            self.prompt(prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<Key>() {
                Ok(key) => return Ok(Some(key)),
                Err(_) => {
                    debug!("rejected operand: {:?}", line.trim());
                    self.say("Invalid input. Please enter an integer.")?;
                }
            }
        }
    }

    fn read_line(&mut self) -> ApplicationResult<Option<String>> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line).with_context("read input")?;
        Ok((n > 0).then_some(line))
    }

    fn prompt(&mut self, text: &str) -> ApplicationResult<()> {
        write!(self.output, "{}", text).with_context("write prompt")?;
        self.output.flush().with_context("flush prompt")
    }

    fn say(&mut self, text: &str) -> ApplicationResult<()> {
        writeln!(self.output, "{}", text).with_context("write output")
    }

    fn pause(&mut self) -> ApplicationResult<()> {
        if !self.settings.pause {
            return Ok(());
        }
        self.prompt("\nPress Enter to continue...")?;
        self.read_line().map(|_| ())
    }

    fn clear(&mut self) -> ApplicationResult<()> {
        if self.settings.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN).with_context("clear screen")?;
        }
        Ok(())
    }
}
