//! CLI command definitions

use crate::domain::{DateReference, ItemId, ItemType};
use crate::error::{JnlError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "jnl")]
#[command(about = "Bullet journal kept in a single SQLite file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The journal file name (created if it does not exist)
    #[arg(value_name = "FILENAME")]
    pub filename: Option<PathBuf>,

    /// Add a log, note, idea, quot or todo item
    #[arg(short, long)]
    pub add: bool,

    /// Add a log item to the journal
    #[arg(short, long, value_name = "LOG")]
    pub log: Option<String>,

    /// Add a note item to the journal
    #[arg(short, long, value_name = "NOTE")]
    pub note: Option<String>,

    /// Add an idea item to the journal
    #[arg(short, long, value_name = "IDEA")]
    pub idea: Option<String>,

    /// Add a quote to the journal
    #[arg(short, long, value_name = "QUOT")]
    pub quot: Option<String>,

    /// Add a todo item to the journal
    #[arg(short, long, value_name = "TODO")]
    pub todo: Option<String>,

    /// Item id the other options act on
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Replace the text of the item given by --id with --item
    #[arg(long)]
    pub edit: bool,

    /// Replacement text for --edit
    #[arg(long, value_name = "ITEM")]
    pub item: Option<String>,

    /// Change the create date of an item (YYYY-MM-DD)
    #[arg(long, value_name = "DT")]
    pub dt: Option<String>,

    /// Attach the contents of --file as the item's page
    #[arg(long)]
    pub pg: bool,

    /// File to read for --pg
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print an item and its page
    #[arg(long = "show_pg")]
    pub show_pg: bool,

    /// Print a todo, its page and the todo legend
    #[arg(long = "show_todo")]
    pub show_todo: bool,

    /// Flag the item given by --id as done
    #[arg(long)]
    pub done: bool,

    /// Move the item given by --id to the archive
    #[arg(long)]
    pub rm: bool,

    /// List all items
    #[arg(long)]
    pub ls: bool,
}

/// The single operation one invocation performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Add { item_type: ItemType, text: String },
    Edit { id: ItemId, text: String },
    SetCreatedAt { id: ItemId, date: DateReference },
    AttachPage { id: ItemId, file: PathBuf },
    ShowPage { id: ItemId },
    ShowTodo { id: ItemId },
    Done { id: ItemId },
    Remove { id: ItemId },
}

impl Action {
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Action::List | Action::ShowPage { .. } | Action::ShowTodo { .. }
        )
    }
}

impl Cli {
    /// Resolve the parsed flags into exactly one action
    pub fn action(&self) -> Result<Action> {
        if self.todo.is_some() && self.log.is_some() {
            return Err(JnlError::ConflictingOptions(
                "Can't provide todo and log on the same command".to_string(),
            ));
        }

        let ops = self.requested_ops();

        if self.add {
            if self.ls {
                return Err(JnlError::InvalidArgument(
                    "cannot add while doing an --ls".to_string(),
                ));
            }
            if !ops.is_empty() {
                return Err(JnlError::ConflictingOptions(format!(
                    "--add cannot be combined with {}",
                    ops.join(", ")
                )));
            }
            return self.add_action();
        }

        if ops.len() > 1 {
            return Err(JnlError::ConflictingOptions(format!(
                "only one of {} may be given",
                ops.join(", ")
            )));
        }

        let Some(op) = ops.first().copied() else {
            return Ok(Action::List);
        };

        if self.ls {
            return Err(JnlError::ConflictingOptions(format!(
                "--ls cannot be combined with {}",
                op
            )));
        }

        let id = self.require_id(op)?;
        match op {
            "--edit" => {
                let text = self.item.clone().ok_or_else(|| {
                    JnlError::InvalidArgument(
                        "you must include --item <replacement item> with an --edit option."
                            .to_string(),
                    )
                })?;
                Ok(Action::Edit { id, text })
            }
            "--dt" => {
                let raw = self.dt.as_deref().unwrap_or_default();
                Ok(Action::SetCreatedAt {
                    id,
                    date: DateReference::parse(raw)?,
                })
            }
            "--pg" => {
                let file = self.file.clone().ok_or_else(|| {
                    JnlError::InvalidArgument(
                        "you must include --file <name> with a --pg option.".to_string(),
                    )
                })?;
                Ok(Action::AttachPage { id, file })
            }
            "--show_pg" => Ok(Action::ShowPage { id }),
            "--show_todo" => Ok(Action::ShowTodo { id }),
            "--done" => Ok(Action::Done { id }),
            _ => Ok(Action::Remove { id }),
        }
    }

    /// Item texts given without --add, which change nothing
    pub fn warnings(&self) -> Vec<String> {
        if self.add {
            return Vec::new();
        }
        self.texts()
            .into_iter()
            .map(|(item_type, _)| {
                let (flag, noun) = match item_type {
                    ItemType::Log => ("--log", "a log"),
                    ItemType::Note => ("--note", "a note"),
                    ItemType::Idea => ("--idea", "an idea"),
                    ItemType::Quot => ("--quot", "a quot"),
                    _ => ("--todo", "a todo item"),
                };
                format!(
                    "You need --add with {} to add {}. Nothing changed.",
                    flag, noun
                )
            })
            .collect()
    }

    fn add_action(&self) -> Result<Action> {
        let mut texts = self.texts();
        match texts.len() {
            0 => Err(JnlError::InvalidArgument(
                "--add needs one of --log, --note, --idea, --quot or --todo".to_string(),
            )),
            1 => {
                let (item_type, text) = texts.remove(0);
                Ok(Action::Add {
                    item_type,
                    text: text.to_string(),
                })
            }
            _ => Err(JnlError::ConflictingOptions(
                "only one item can be added per command".to_string(),
            )),
        }
    }

    fn texts(&self) -> Vec<(ItemType, &str)> {
        [
            (ItemType::Log, &self.log),
            (ItemType::Note, &self.note),
            (ItemType::Idea, &self.idea),
            (ItemType::Quot, &self.quot),
            (ItemType::Todo, &self.todo),
        ]
        .into_iter()
        .filter_map(|(t, text)| text.as_deref().map(|s| (t, s)))
        .collect()
    }

    fn requested_ops(&self) -> Vec<&'static str> {
        [
            ("--edit", self.edit),
            ("--dt", self.dt.is_some()),
            ("--pg", self.pg),
            ("--show_pg", self.show_pg),
            ("--show_todo", self.show_todo),
            ("--done", self.done),
            ("--rm", self.rm),
        ]
        .into_iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| name)
        .collect()
    }

    fn require_id(&self, op: &str) -> Result<ItemId> {
        let raw = self.id.as_deref().ok_or_else(|| {
            let article = if op == "--edit" { "an" } else { "a" };
            JnlError::InvalidArgument(format!(
                "you must include --id <item_id> with {} {} option.",
                article, op
            ))
        })?;
        raw.parse().map_err(JnlError::InvalidArgument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["jnl", "main.jnl"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_default_is_list() {
        assert_eq!(parse(&[]).action().unwrap(), Action::List);
        assert_eq!(parse(&["--ls"]).action().unwrap(), Action::List);
        assert_eq!(parse(&["--id", "3"]).action().unwrap(), Action::List);
    }

    #[test]
    fn test_add_kinds() {
        assert_eq!(
            parse(&["--add", "--log", "took M3 to Sadies"]).action().unwrap(),
            Action::Add {
                item_type: ItemType::Log,
                text: "took M3 to Sadies".to_string()
            }
        );
        assert_eq!(
            parse(&["-a", "-q", "To be"]).action().unwrap(),
            Action::Add {
                item_type: ItemType::Quot,
                text: "To be".to_string()
            }
        );
        assert_eq!(
            parse(&["-a", "-t", "groceries"]).action().unwrap(),
            Action::Add {
                item_type: ItemType::Todo,
                text: "groceries".to_string()
            }
        );
    }

    #[test]
    fn test_todo_and_log_conflict() {
        let err = parse(&["--add", "--todo", "a", "--log", "b"])
            .action()
            .unwrap_err();
        assert!(matches!(err, JnlError::ConflictingOptions(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_add_two_kinds_conflict() {
        let err = parse(&["--add", "--note", "a", "--idea", "b"])
            .action()
            .unwrap_err();
        assert!(matches!(err, JnlError::ConflictingOptions(_)));
    }

    #[test]
    fn test_add_needs_text() {
        assert!(matches!(
            parse(&["--add"]).action(),
            Err(JnlError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse(&["--add", "--log", "x", "--ls"]).action(),
            Err(JnlError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_add_with_other_op_conflicts() {
        assert!(matches!(
            parse(&["--add", "--log", "x", "--id", "2", "--done"]).action(),
            Err(JnlError::ConflictingOptions(_))
        ));
    }

    #[test]
    fn test_ops_require_id() {
        for args in [
            vec!["--done"],
            vec!["--rm"],
            vec!["--show_pg"],
            vec!["--show_todo"],
            vec!["--dt", "2023-11-20"],
            vec!["--pg", "--file", "temp.txt"],
            vec!["--edit", "--item", "x"],
        ] {
            match parse(&args).action() {
                Err(JnlError::InvalidArgument(msg)) => assert!(msg.contains("--id")),
                other => panic!("{:?}: expected missing --id, got {:?}", args, other),
            }
        }
    }

    #[test]
    fn test_id_must_be_numeric() {
        assert!(matches!(
            parse(&["--id", "2 OR 1=1", "--done"]).action(),
            Err(JnlError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_edit_needs_item() {
        match parse(&["--id", "4", "--edit"]).action() {
            Err(JnlError::InvalidArgument(msg)) => assert!(msg.contains("--item")),
            other => panic!("Expected missing --item, got {:?}", other),
        }
        assert_eq!(
            parse(&["--id", "4", "--edit", "--item", "new text"])
                .action()
                .unwrap(),
            Action::Edit {
                id: ItemId::new(4),
                text: "new text".to_string()
            }
        );
    }

    #[test]
    fn test_pg_needs_file() {
        match parse(&["--id", "7", "--pg"]).action() {
            Err(JnlError::InvalidArgument(msg)) => assert!(msg.contains("--file")),
            other => panic!("Expected missing --file, got {:?}", other),
        }
        assert_eq!(
            parse(&["--id", "7", "--pg", "--file", "temp.txt"])
                .action()
                .unwrap(),
            Action::AttachPage {
                id: ItemId::new(7),
                file: PathBuf::from("temp.txt")
            }
        );
    }

    #[test]
    fn test_dt_parses_date() {
        assert_eq!(
            parse(&["--id", "4", "--dt", "2023-11-20"]).action().unwrap(),
            Action::SetCreatedAt {
                id: ItemId::new(4),
                date: DateReference::Date(NaiveDate::from_ymd_opt(2023, 11, 20).unwrap())
            }
        );
        assert!(matches!(
            parse(&["--id", "4", "--dt", "11/20/2023"]).action(),
            Err(JnlError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_two_ops_conflict() {
        assert!(matches!(
            parse(&["--id", "4", "--done", "--rm"]).action(),
            Err(JnlError::ConflictingOptions(_))
        ));
        assert!(matches!(
            parse(&["--id", "4", "--done", "--ls"]).action(),
            Err(JnlError::ConflictingOptions(_))
        ));
    }

    #[test]
    fn test_show_underscore_flags() {
        assert_eq!(
            parse(&["--id", "9", "--show_todo"]).action().unwrap(),
            Action::ShowTodo { id: ItemId::new(9) }
        );
        assert_eq!(
            parse(&["--id", "9", "--show_pg"]).action().unwrap(),
            Action::ShowPage { id: ItemId::new(9) }
        );
    }

    #[test]
    fn test_text_without_add_warns_and_lists() {
        let cli = parse(&["--idea", "maybe"]);
        assert_eq!(cli.action().unwrap(), Action::List);
        assert_eq!(
            cli.warnings(),
            vec!["You need --add with --idea to add an idea. Nothing changed.".to_string()]
        );
        assert!(parse(&["--add", "--idea", "maybe"]).warnings().is_empty());
    }

    #[test]
    fn test_mutation_classification() {
        assert!(!Action::List.is_mutation());
        assert!(!Action::ShowPage { id: ItemId::new(2) }.is_mutation());
        assert!(Action::Done { id: ItemId::new(2) }.is_mutation());
        assert!(Action::Remove { id: ItemId::new(2) }.is_mutation());
    }
}
