//! Parsing of a submitted line and the table of known commands.

/// Every command the terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    Projects,
    Skills,
    About,
    Contact,
    Resume,
    Whoami,
    Clear,
    Ls,
    Cd,
    Open,
    Reboot,
    Exit,
    Diizzy,
}

/// Registry row: the typed name and whether completion offers it.
#[derive(Debug, Clone, Copy)]
pub struct CommandDef {
    pub name: &'static str,
    pub kind: CommandKind,
    pub listed: bool,
}

const fn def(name: &'static str, kind: CommandKind) -> CommandDef {
    CommandDef {
        name,
        kind,
        listed: true,
    }
}

pub const COMMANDS: &[CommandDef] = &[
    def("help", CommandKind::Help),
    def("projects", CommandKind::Projects),
    def("skills", CommandKind::Skills),
    def("about", CommandKind::About),
    def("contact", CommandKind::Contact),
    def("resume", CommandKind::Resume),
    def("whoami", CommandKind::Whoami),
    def("clear", CommandKind::Clear),
    def("ls", CommandKind::Ls),
    def("cd", CommandKind::Cd),
    def("open", CommandKind::Open),
    def("reboot", CommandKind::Reboot),
    def("exit", CommandKind::Exit),
    CommandDef {
        name: "diizzy",
        kind: CommandKind::Diizzy,
        listed: false,
    },
];

impl CommandKind {
    /// Case-insensitive lookup by command name.
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|def| def.name.eq_ignore_ascii_case(name))
            .map(|def| def.kind)
    }

    pub fn name(self) -> &'static str {
        COMMANDS
            .iter()
            .find(|def| def.kind == self)
            .map(|def| def.name)
            .unwrap_or("?")
    }
}

/// Names offered by completion, in table order.
pub fn listed_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().filter(|def| def.listed).map(|def| def.name)
}

/// A non-empty input line split into its command word and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// The trimmed line as typed.
    pub raw: &'a str,
    /// First word, lowercased.
    pub name: String,
    pub args: Vec<&'a str>,
}

/// Split a line on whitespace. Returns `None` for blank input.
pub fn parse(line: &str) -> Option<ParsedLine<'_>> {
    let raw = line.trim();
    let mut words = raw.split_whitespace();
    let name = words.next()?.to_lowercase();
    Some(ParsedLine {
        raw,
        name,
        args: words.collect(),
    })
}
