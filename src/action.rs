/// A REPL command and the help shown for it.
pub struct Action {
    pub cmd: &'static str,
    pub desc: &'static str,
    pub arg: Option<ActionArg>,
}

pub struct ActionArg {
    pub name: &'static str,
    pub help: &'static str,
    pub required: bool,
    pub multiple: bool,
}

pub const START_CMD: &str = "start";
pub const GUESS_CMD: &str = "guess";
pub const HINT_CMD: &str = "hint";
pub const LISTS_CMD: &str = "lists";
pub const HISTORY_CMD: &str = "history";

pub const DIFFICULTY_ARG: &str = "difficulty";
pub const NAME_ARG: &str = "name";

pub const ACTIONS: &[Action] = &[
    Action {
        cmd: START_CMD,
        desc: "Start a new round with a random monster",
        arg: Some(ActionArg {
            name: DIFFICULTY_ARG,
            help: "easy, medium or hard (defaults to the last one played)",
            required: false,
            multiple: false,
        }),
    },
    Action {
        cmd: GUESS_CMD,
        desc: "Guess a card by name",
        arg: Some(ActionArg {
            name: NAME_ARG,
            help: "Card name",
            required: true,
            multiple: true,
        }),
    },
    Action {
        cmd: HINT_CMD,
        desc: "Reveal one field of the answer",
        arg: None,
    },
    Action {
        cmd: LISTS_CMD,
        desc: "Show the attribute and race lists",
        arg: None,
    },
    Action {
        cmd: HISTORY_CMD,
        desc: "Show every guess of this round",
        arg: None,
    },
];
