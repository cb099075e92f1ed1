//! Todo data model

use std::collections::BTreeSet;
use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use super::error::{Result, TodoError};
use crate::confirm::Confirm;

/// Line prefix of a completed todo
pub const COMPLETE_PREFIX: &str = "[x] ";

/// Line prefix of an open todo
pub const INCOMPLETE_PREFIX: &str = "[ ] ";

/// A single entry in the list.
///
/// Todos carry no identifier of their own: their id is their position in
/// the [`TodoList`], and only holds until the list is reordered or shrunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub description: String,
    pub complete: bool,
}

impl Todo {
    /// Create a new, incomplete todo
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            complete: false,
        }
    }

    /// Completion marker for this todo
    pub fn prefix(&self) -> &'static str {
        if self.complete {
            COMPLETE_PREFIX
        } else {
            INCOMPLETE_PREFIX
        }
    }

    /// Parse a store file line. Lines without a known prefix are kept
    /// whole as an incomplete todo.
    pub fn from_line(line: &str) -> Self {
        if let Some(description) = line.strip_prefix(COMPLETE_PREFIX) {
            Self {
                description: description.to_string(),
                complete: true,
            }
        } else if let Some(description) = line.strip_prefix(INCOMPLETE_PREFIX) {
            Self::new(description)
        } else {
            Self::new(line)
        }
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix(), self.description)
    }
}

/// Check a description before it goes into the list
fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(TodoError::MissingDescription);
    }
    if description.contains(['\n', '\r']) {
        return Err(TodoError::InvalidDescription);
    }
    Ok(())
}

/// Ordered todo list; a todo's id is its index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Todo> {
        self.todos.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter()
    }

    /// Highest valid id, or `None` for an empty list
    pub fn max_id(&self) -> Option<usize> {
        self.todos.len().checked_sub(1)
    }

    /// Parse one id argument against the current list.
    pub fn parse_id(&self, arg: &str) -> Result<usize> {
        if arg.is_empty() || !arg.chars().all(|c| c.is_ascii_digit()) {
            return Err(TodoError::InvalidId(arg.to_string()));
        }
        let id: usize = arg
            .parse()
            .map_err(|_| TodoError::InvalidId(arg.to_string()))?;
        self.check_id(id)?;
        Ok(id)
    }

    /// Parse a list of id arguments; fails on the first bad one.
    pub fn parse_ids<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<usize>> {
        args.iter().map(|arg| self.parse_id(arg.as_ref())).collect()
    }

    fn check_id(&self, id: usize) -> Result<()> {
        match self.max_id() {
            None => Err(TodoError::EmptyList(id)),
            Some(max) if id > max => Err(TodoError::IdOutOfRange { id, max }),
            Some(_) => Ok(()),
        }
    }

    fn check_ids(&self, ids: &[usize]) -> Result<()> {
        ids.iter().try_for_each(|&id| self.check_id(id))
    }

    /// Append a new incomplete todo, returning its id
    pub fn add(&mut self, description: impl Into<String>) -> Result<usize> {
        let description = description.into();
        validate_description(&description)?;
        self.todos.push(Todo::new(description));
        debug!("added todo {}", self.todos.len() - 1);
        Ok(self.todos.len() - 1)
    }

    /// Replace the description of a todo, keeping its completion flag
    pub fn edit(&mut self, id: usize, description: impl Into<String>) -> Result<()> {
        self.check_id(id)?;
        let description = description.into();
        validate_description(&description)?;
        self.todos[id].description = description;
        Ok(())
    }

    /// Replace every occurrence of `from` with `to` in a todo's description.
    /// An empty or absent `from` leaves the description alone.
    pub fn replace(&mut self, id: usize, from: &str, to: &str) -> Result<()> {
        self.check_id(id)?;
        if from.is_empty() || !self.todos[id].description.contains(from) {
            return Ok(());
        }
        let replaced = self.todos[id].description.replace(from, to);
        validate_description(&replaced)?;
        self.todos[id].description = replaced;
        Ok(())
    }

    pub fn mark_complete(&mut self, ids: &[usize]) -> Result<()> {
        self.set_complete(ids, true)
    }

    pub fn mark_incomplete(&mut self, ids: &[usize]) -> Result<()> {
        self.set_complete(ids, false)
    }

    fn set_complete(&mut self, ids: &[usize], complete: bool) -> Result<()> {
        self.check_ids(ids)?;
        for &id in ids {
            self.todos[id].complete = complete;
        }
        debug!("set complete={} on {:?}", complete, ids);
        Ok(())
    }

    /// Exchange two todos, description and completion flag alike
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_ids(&[a, b])?;
        self.todos.swap(a, b);
        Ok(())
    }

    /// Remove the given todos. Incomplete ones are only removed when
    /// `confirm` agrees; complete ones go without asking. Returns how many
    /// were removed.
    pub fn remove(&mut self, ids: &[usize], confirm: &mut dyn Confirm) -> Result<usize> {
        self.check_ids(ids)?;

        let mut doomed = BTreeSet::new();
        for &id in ids {
            if doomed.contains(&id) {
                continue;
            }
            let todo = &self.todos[id];
            if todo.complete
                || confirm.confirm(&format!(
                    "Todo {} \"{}\" is not complete. Remove it?",
                    id, todo.description
                ))
            {
                doomed.insert(id);
            }
        }

        let mut index = 0;
        self.todos.retain(|_| {
            let keep = !doomed.contains(&index);
            index += 1;
            keep
        });
        debug!("removed todos {:?}", doomed);
        Ok(doomed.len())
    }

    /// Remove every complete todo after a single confirmation. Returns how
    /// many were removed; nothing is asked when none are complete.
    pub fn remove_complete(&mut self, confirm: &mut dyn Confirm) -> usize {
        let count = self.todos.iter().filter(|t| t.complete).count();
        if count == 0 {
            return 0;
        }

        let noun = if count == 1 { "todo" } else { "todos" };
        if !confirm.confirm(&format!("Remove {} completed {}?", count, noun)) {
            return 0;
        }

        self.todos.retain(|t| !t.complete);
        debug!("removed {} completed todos", count);
        count
    }

    /// Print every todo as `" 0 [x] description"`
    pub fn print_all(&self, out: &mut dyn Write) -> io::Result<()> {
        self.print_where(out, |_| true)
    }

    /// Print only open todos, keeping their current ids
    pub fn print_incomplete(&self, out: &mut dyn Write) -> io::Result<()> {
        self.print_where(out, |t| !t.complete)
    }

    fn print_where(&self, out: &mut dyn Write, show: impl Fn(&Todo) -> bool) -> io::Result<()> {
        for (id, todo) in self.todos.iter().enumerate().filter(|(_, t)| show(t)) {
            writeln!(out, "{:>2} {}", id, todo)?;
        }
        Ok(())
    }
}

impl FromIterator<Todo> for TodoList {
    fn from_iter<I: IntoIterator<Item = Todo>>(iter: I) -> Self {
        Self {
            todos: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::Scripted;

    fn sample() -> TodoList {
        TodoList::from_iter([
            Todo::new("buy milk"),
            Todo {
                description: "pay rent".to_string(),
                complete: true,
            },
            Todo::new("write report"),
        ])
    }

    fn descriptions(list: &TodoList) -> Vec<&str> {
        list.iter().map(|t| t.description.as_str()).collect()
    }

    fn render(list: &TodoList, all: bool) -> String {
        let mut out = Vec::new();
        if all {
            list.print_all(&mut out).unwrap();
        } else {
            list.print_incomplete(&mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_from_line() {
        assert_eq!(
            Todo::from_line("[x] done"),
            Todo {
                description: "done".into(),
                complete: true
            }
        );
        assert_eq!(Todo::from_line("[ ] open"), Todo::new("open"));
        assert_eq!(Todo::from_line("no prefix"), Todo::new("no prefix"));
        assert_eq!(Todo::from_line("[x]tight"), Todo::new("[x]tight"));
        assert_eq!(Todo::from_line("[ ] [x] nested"), Todo::new("[x] nested"));
    }

    #[test]
    fn test_display_uses_prefix() {
        let mut todo = Todo::new("walk dog");
        assert_eq!(todo.to_string(), "[ ] walk dog");
        todo.complete = true;
        assert_eq!(todo.to_string(), "[x] walk dog");
    }

    #[test]
    fn test_prefixes_have_equal_length() {
        assert_eq!(COMPLETE_PREFIX.len(), 4);
        assert_eq!(INCOMPLETE_PREFIX.len(), 4);
    }

    #[test]
    fn test_add_appends_incomplete() {
        let mut list = sample();
        let id = list.add("x").unwrap();
        assert_eq!(id, 3);
        assert_eq!(list.len(), 4);
        assert_eq!(list.get(3), Some(&Todo::new("x")));
    }

    #[test]
    fn test_add_rejects_empty_description() {
        let mut list = TodoList::new();
        assert!(matches!(list.add(""), Err(TodoError::MissingDescription)));
        assert!(matches!(list.add("   "), Err(TodoError::MissingDescription)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_rejects_multiline_description() {
        let mut list = TodoList::new();
        assert!(matches!(list.add("one\ntwo"), Err(TodoError::InvalidDescription)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_edit_keeps_completion() {
        let mut list = sample();
        list.edit(1, "pay all the rent").unwrap();
        assert_eq!(list.get(1).unwrap().description, "pay all the rent");
        assert!(list.get(1).unwrap().complete);
    }

    #[test]
    fn test_edit_out_of_range() {
        let mut list = sample();
        assert!(matches!(
            list.edit(3, "nope"),
            Err(TodoError::IdOutOfRange { id: 3, max: 2 })
        ));
    }

    #[test]
    fn test_replace_all_occurrences() {
        let mut list = TodoList::from_iter([Todo::new("buy milk today, milk!")]);
        list.replace(0, "milk", "bread").unwrap();
        assert_eq!(list.get(0).unwrap().description, "buy bread today, bread!");
    }

    #[test]
    fn test_replace_absent_or_empty_is_noop() {
        let mut list = sample();
        let before = list.clone();
        list.replace(0, "cheese", "bread").unwrap();
        list.replace(0, "", "bread").unwrap();
        assert_eq!(list, before);
    }

    #[test]
    fn test_replace_absent_on_empty_description_is_noop() {
        let mut list = TodoList::parse("[ ] \n");
        list.replace(0, "x", "y").unwrap();
        assert_eq!(list.get(0), Some(&Todo::new("")));
    }

    #[test]
    fn test_replace_to_empty_description_fails() {
        let mut list = TodoList::from_iter([Todo::new("milk")]);
        assert!(matches!(
            list.replace(0, "milk", ""),
            Err(TodoError::MissingDescription)
        ));
        assert_eq!(list.get(0).unwrap().description, "milk");
    }

    #[test]
    fn test_complete_then_incomplete_restores() {
        let mut list = sample();
        let before = list.clone();
        list.mark_complete(&[0, 0, 2]).unwrap();
        assert!(list.iter().all(|t| t.complete));
        list.mark_incomplete(&[0, 2]).unwrap();
        assert_eq!(list, before);
    }

    #[test]
    fn test_mark_rejects_any_bad_id_without_mutation() {
        let mut list = sample();
        let before = list.clone();
        assert!(list.mark_complete(&[0, 7]).is_err());
        assert_eq!(list, before);
    }

    #[test]
    fn test_swap_twice_restores() {
        let mut list = sample();
        let before = list.clone();
        list.swap(0, 1).unwrap();
        assert_eq!(descriptions(&list), vec!["pay rent", "buy milk", "write report"]);
        assert!(list.get(0).unwrap().complete);
        list.swap(0, 1).unwrap();
        assert_eq!(list, before);
    }

    #[test]
    fn test_swap_same_id_is_noop() {
        let mut list = sample();
        let before = list.clone();
        list.swap(2, 2).unwrap();
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_complete_todo_never_prompts() {
        let mut list = sample();
        let mut confirm = Scripted::default();
        assert_eq!(list.remove(&[1], &mut confirm).unwrap(), 1);
        assert!(confirm.asked.is_empty());
        assert_eq!(descriptions(&list), vec!["buy milk", "write report"]);
    }

    #[test]
    fn test_remove_incomplete_follows_answers() {
        let mut list = sample();
        let mut confirm = Scripted::new([false, true]);
        assert_eq!(list.remove(&[0, 2], &mut confirm).unwrap(), 1);
        assert_eq!(confirm.asked.len(), 2);
        assert!(confirm.asked[0].contains("buy milk"));
        assert_eq!(descriptions(&list), vec!["buy milk", "pay rent"]);
    }

    #[test]
    fn test_remove_compacts_ids() {
        let mut list = sample();
        list.remove(&[0, 1], &mut Scripted::new([true])).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.max_id(), Some(0));
        assert_eq!(list.get(0).unwrap().description, "write report");
    }

    #[test]
    fn test_remove_duplicate_ids_once() {
        let mut list = sample();
        let mut confirm = Scripted::new([true, true]);
        assert_eq!(list.remove(&[2, 2], &mut confirm).unwrap(), 1);
        assert_eq!(confirm.asked.len(), 1);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_complete_declined_is_noop() {
        let mut list = sample();
        let before = list.clone();
        let mut confirm = Scripted::new([false]);
        assert_eq!(list.remove_complete(&mut confirm), 0);
        assert_eq!(confirm.asked, vec!["Remove 1 completed todo?"]);
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_complete_confirmed() {
        let mut list = sample();
        list.mark_complete(&[2]).unwrap();
        assert_eq!(list.remove_complete(&mut Scripted::new([true])), 2);
        assert_eq!(descriptions(&list), vec!["buy milk"]);
    }

    #[test]
    fn test_remove_complete_without_complete_todos_does_not_ask() {
        let mut list = TodoList::from_iter([Todo::new("a")]);
        let mut confirm = Scripted::new([true]);
        assert_eq!(list.remove_complete(&mut confirm), 0);
        assert!(confirm.asked.is_empty());
    }

    #[test]
    fn test_parse_id() {
        let list = sample();
        assert_eq!(list.parse_id("0").unwrap(), 0);
        assert_eq!(list.parse_id("2").unwrap(), 2);
        assert!(matches!(list.parse_id("-1"), Err(TodoError::InvalidId(_))));
        assert!(matches!(list.parse_id("abc"), Err(TodoError::InvalidId(_))));
        assert!(matches!(list.parse_id("+1"), Err(TodoError::InvalidId(_))));
        assert!(matches!(list.parse_id(""), Err(TodoError::InvalidId(_))));
        assert!(matches!(list.parse_id(" 0"), Err(TodoError::InvalidId(_))));
        assert!(matches!(list.parse_id("1 "), Err(TodoError::InvalidId(_))));
        assert!(matches!(
            list.parse_id("3"),
            Err(TodoError::IdOutOfRange { id: 3, max: 2 })
        ));
        assert!(matches!(
            list.parse_id("99999999999999999999999"),
            Err(TodoError::InvalidId(_))
        ));
    }

    #[test]
    fn test_parse_id_on_empty_list() {
        assert!(matches!(
            TodoList::new().parse_id("0"),
            Err(TodoError::EmptyList(0))
        ));
    }

    #[test]
    fn test_parse_ids_stops_at_first_error() {
        let list = sample();
        assert_eq!(list.parse_ids(&["2", "0"]).unwrap(), vec![2, 0]);
        assert!(list.parse_ids(&["1", "x", "2"]).is_err());
    }

    #[test]
    fn test_print_all() {
        let list = sample();
        assert_eq!(
            render(&list, true),
            " 0 [ ] buy milk\n 1 [x] pay rent\n 2 [ ] write report\n"
        );
    }

    #[test]
    fn test_print_incomplete_keeps_live_ids() {
        let list = sample();
        assert_eq!(render(&list, false), " 0 [ ] buy milk\n 2 [ ] write report\n");
    }

    #[test]
    fn test_print_wide_ids() {
        let list: TodoList = (0..11).map(|i| Todo::new(format!("item {}", i))).collect();
        let output = render(&list, true);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[9], " 9 [ ] item 9");
        assert_eq!(lines[10], "10 [ ] item 10");
    }
}
