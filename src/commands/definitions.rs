//! Command definitions and the command registry.
//!
//! The registry is the only authority on which command names exist. It is
//! built once by whoever assembles the interpreter and then only read:
//! - name validation for the router
//! - prefix autocompletion
//! - help text and man pages

use crate::content::ManPageEntry;

/// Definition of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDef {
    /// Command name as typed (lowercase).
    pub name: &'static str,
    /// Short description shown in help and man pages.
    pub description: &'static str,
    /// Usage synopsis.
    pub usage: &'static str,
    /// Example invocations for the man page.
    pub examples: &'static [&'static str],
    /// Extra notes for the man page.
    pub notes: Option<&'static str>,
    /// Category for grouping in help.
    pub category: CommandCategory,
}

impl CommandDef {
    /// Returns the man page data for this command.
    pub fn man_entry(&self) -> ManPageEntry {
        ManPageEntry {
            desc: self.description.to_string(),
            usage: self.usage.to_string(),
            examples: self.examples.iter().map(|e| e.to_string()).collect(),
            notes: self.notes.map(String::from),
        }
    }
}

/// Category for grouping commands in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCategory {
    /// Who the site owner is.
    About,
    /// Projects, posts and outbound links.
    Content,
    /// Utilities.
    Tools,
    /// Easter eggs.
    Fun,
    /// Terminal session control.
    Session,
}

impl CommandCategory {
    const ALL: [CommandCategory; 5] = [
        Self::About,
        Self::Content,
        Self::Tools,
        Self::Fun,
        Self::Session,
    ];

    /// Returns the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Content => "Content",
            Self::Tools => "Tools",
            Self::Fun => "Fun",
            Self::Session => "Session",
        }
    }
}

const fn def(
    name: &'static str,
    description: &'static str,
    usage: &'static str,
    examples: &'static [&'static str],
    notes: Option<&'static str>,
    category: CommandCategory,
) -> CommandDef {
    CommandDef {
        name,
        description,
        usage,
        examples,
        notes,
        category,
    }
}

use CommandCategory::{About, Content, Fun, Session, Tools};

/// Built-in command definitions, in registry order.
pub static COMMANDS: &[CommandDef] = &[
    def("banner", "Show the welcome banner.", "banner", &[], None, About),
    def(
        "blog",
        "List blog posts or read one.",
        "blog [slug]",
        &["blog", "blog hello-world"],
        Some("Without a slug, lists every post with its date and summary."),
        Content,
    ),
    def("clear", "Clear the terminal output.", "clear", &[], None, Session),
    def("contact", "Show contact details.", "contact", &[], None, About),
    def(
        "converter",
        "Open the music link converter project.",
        "converter",
        &[],
        Some("Opens in a new tab when the project is configured."),
        Content,
    ),
    def(
        "curl",
        "Open a URL in a new tab.",
        "curl <url>",
        &["curl https://example.com"],
        Some("Nothing is fetched; the page is opened in the browser."),
        Tools,
    ),
    def("qr", "Show a QR code linking to this site.", "qr", &[], None, Tools),
    def("date", "Print the current date and time.", "date", &[], None, Tools),
    def(
        "echo",
        "Display a line of text in the terminal.",
        "echo [text]",
        &["echo Hello, World!"],
        Some("If no text is provided, usage information will be displayed."),
        Tools,
    ),
    def("email", "Compose an email to the site owner.", "email", &[], None, Content),
    def(
        "experience",
        "Show work and education history.",
        "experience",
        &[],
        None,
        About,
    ),
    def("github", "Open the GitHub profile.", "github", &[], None, Content),
    def(
        "grep",
        "Filter piped output by a pattern.",
        "<command> | grep <pattern>",
        &["help | grep theme", "projects | grep api"],
        Some("Matching is case-insensitive. Several greps can be chained."),
        Tools,
    ),
    def(
        "help",
        "List available commands.",
        "help",
        &["help", "help | grep blog"],
        None,
        Tools,
    ),
    def(
        "history",
        "Show commands run this session.",
        "history",
        &[],
        Some("Use the up and down arrow keys to recall previous commands."),
        Tools,
    ),
    def("ls", "List available commands in columns.", "ls", &[], None, Tools),
    def(
        "man",
        "Show the manual page for a command.",
        "man <command>",
        &["man echo", "man weather"],
        None,
        Tools,
    ),
    def(
        "neofetch",
        "Show site information with style.",
        "neofetch",
        &[],
        None,
        About,
    ),
    def(
        "projects",
        "List projects or open one by name.",
        "projects [name]",
        &["projects", "projects converter"],
        None,
        Content,
    ),
    def("repo", "Open this site's source repository.", "repo", &[], None, Content),
    def("resume", "Open the resume.", "resume", &[], None, About),
    def("skills", "Show skill levels.", "skills", &[], None, About),
    def(
        "snake",
        "Play snake.",
        "snake",
        &[],
        Some("Arrow keys steer; press q to quit."),
        Fun,
    ),
    def(
        "stats",
        "Show usage statistics.",
        "stats",
        &[],
        None,
        Tools,
    ),
    def(
        "theme",
        "Toggle or set the colour theme.",
        "theme [dark|light]",
        &["theme", "theme light"],
        Some("Without an argument, switches to the other theme."),
        Tools,
    ),
    def("uptime", "Show how long this session has been open.", "uptime", &[], None, Tools),
    def(
        "weather",
        "Show current weather.",
        "weather [location]",
        &["weather", "weather London"],
        Some("Without a location, uses the visitor's approximate location."),
        Tools,
    ),
    def("whoami", "Print the current user.", "whoami", &[], None, About),
    def("sudo", "Try to gain superuser powers.", "sudo <command>", &[], None, Fun),
    def("cd", "Change directory.", "cd <dir>", &[], None, Fun),
    def("close", "Close the terminal.", "close", &[], None, Session),
    def("exit", "Close the terminal.", "exit", &[], None, Session),
];

/// Returns the names of all commands starting with `input` (lowercased), in
/// list order. Empty input matches nothing.
pub fn autocomplete_command<'a, S: AsRef<str>>(input: &str, commands: &'a [S]) -> Vec<&'a str> {
    if input.is_empty() {
        return Vec::new();
    }
    let normalized = input.to_lowercase();
    commands
        .iter()
        .map(AsRef::as_ref)
        .filter(|cmd| cmd.starts_with(&normalized))
        .collect()
}

/// The fixed, ordered set of recognized commands.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandDef>,
    names: Vec<&'static str>,
}

impl CommandRegistry {
    /// Creates a registry from definitions, keeping their order.
    pub fn new(commands: Vec<CommandDef>) -> Self {
        let names = commands.iter().map(|c| c.name).collect();
        Self { commands, names }
    }

    /// The built-in command set.
    pub fn builtin() -> Self {
        Self::new(COMMANDS.to_vec())
    }

    /// Command names in registry order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Finds a command definition by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&CommandDef> {
        let name_lower = name.trim().to_lowercase();
        self.commands.iter().find(|c| c.name == name_lower)
    }

    /// Returns true if `name` is a registered command.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Completes a command prefix against this registry.
    pub fn autocomplete(&self, input: &str) -> Vec<&str> {
        autocomplete_command(input, &self.names)
    }

    /// Man page data for a command, if it exists.
    pub fn man_entry(&self, name: &str) -> Option<ManPageEntry> {
        self.find(name).map(CommandDef::man_entry)
    }

    /// Generates help text grouped by category.
    pub fn help_text(&self) -> String {
        let category_blocks = CommandCategory::ALL
            .iter()
            .filter_map(|category| {
                let command_lines = self
                    .commands
                    .iter()
                    .filter(|c| c.category == *category)
                    .map(|cmd| format!("  {:<12} - {}\n", cmd.name, cmd.description))
                    .collect::<Vec<_>>();

                if command_lines.is_empty() {
                    return None;
                }

                Some(format!(
                    "{}:\n{}\n",
                    category.display_name(),
                    command_lines.join("")
                ))
            })
            .collect::<Vec<_>>()
            .join("");

        let keyboard_shortcuts = [
            "Keyboard shortcuts:",
            "  Tab             - Autocomplete command",
            "  ↑/↓             - History navigation",
            "  Ctrl+L          - Clear the terminal",
            "",
            "Tip: pipe any output into grep to filter it, e.g. ls | grep s",
        ]
        .join("\n");

        format!("{}{}", category_blocks, keyboard_shortcuts)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
