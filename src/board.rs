use crate::models::Task;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct Board {
    day: NaiveDate,
    tasks: Vec<Task>,
}

impl Board {
    pub fn new(day: NaiveDate, tasks: Vec<Task>) -> Self {
        Self { day, tasks }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn add_task(&mut self, name: &str, description: Option<&str>) -> Option<&Task> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let description = description
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_owned);

        self.tasks.push(Task::new(name, description));
        self.tasks.last()
    }

    pub fn change_count(&mut self, id: &str, delta: i64) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.count = task.count.saturating_add_signed(delta);
                true
            }
            None => false,
        }
    }

    // an empty board never asks
    pub fn clear_all(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if self.tasks.is_empty() || !confirm() {
            return false;
        }
        self.tasks.clear();
        true
    }

    pub fn reset_counts(&mut self, day: NaiveDate) {
        self.day = day;
        for task in &mut self.tasks {
            task.count = 0;
        }
    }

    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        if self.day == today {
            return false;
        }
        self.reset_counts(today);
        true
    }

    pub fn total_ticks(&self) -> u64 {
        self.tasks
            .iter()
            .fold(0u64, |sum, task| sum.saturating_add(task.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn board_with(names: &[&str]) -> Board {
        let mut board = Board::new(day(16), Vec::new());
        for name in names {
            board.add_task(name, None).expect("valid name");
        }
        board
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let mut board = board_with(&[]);
        assert!(board.add_task("  ", Some("ignored")).is_none());
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn blank_description_becomes_absent() {
        let mut board = board_with(&[]);
        let task = board.add_task("  Stretch ", Some("   ")).unwrap();
        assert_eq!(task.name, "Stretch");
        assert_eq!(task.description, None);
        assert_eq!(task.count, 0);
    }

    #[test]
    fn description_is_trimmed() {
        let mut board = board_with(&[]);
        let task = board.add_task("Dish Run", Some("  after dinner ")).unwrap();
        assert_eq!(task.description.as_deref(), Some("after dinner"));
    }

    #[test]
    fn tasks_keep_insertion_order() {
        let board = board_with(&["a", "b", "c"]);
        let names: Vec<_> = board.tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn count_never_goes_negative() {
        let mut board = board_with(&["Stretch"]);
        let id = board.tasks()[0].id.clone();

        let deltas = [-1, 1, 1, -1, -1, -1, 1, 1, 1, -1];
        let mut expected = 0i64;
        for delta in deltas {
            assert!(board.change_count(&id, delta));
            expected = (expected + delta).max(0);
            assert_eq!(board.tasks()[0].count as i64, expected);
        }
        assert_eq!(board.tasks()[0].count, 2);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut board = board_with(&["Stretch"]);
        assert!(!board.change_count("missing", 1));
        assert_eq!(board.total_ticks(), 0);
    }

    #[test]
    fn total_ticks_sums_counts() {
        let mut board = board_with(&["a", "b"]);
        let (a, b) = (board.tasks()[0].id.clone(), board.tasks()[1].id.clone());
        board.change_count(&a, 1);
        board.change_count(&a, 1);
        board.change_count(&b, 1);
        assert_eq!(board.total_ticks(), 3);
    }

    #[test]
    fn clear_all_on_empty_board_never_asks() {
        let mut board = board_with(&[]);
        let mut asked = false;
        assert!(!board.clear_all(|| {
            asked = true;
            true
        }));
        assert!(!asked);
    }

    #[test]
    fn declined_clear_keeps_tasks() {
        let mut board = board_with(&["a", "b"]);
        assert!(!board.clear_all(|| false));
        assert_eq!(board.tasks().len(), 2);
    }

    #[test]
    fn confirmed_clear_empties_board() {
        let mut board = board_with(&["a"]);
        let id = board.tasks()[0].id.clone();
        board.change_count(&id, 4);

        assert!(board.clear_all(|| true));
        assert!(board.tasks().is_empty());
        assert_eq!(board.total_ticks(), 0);
    }

    #[test]
    fn roll_over_resets_counts_but_keeps_tasks() {
        let mut board = board_with(&["a", "b"]);
        let before: Vec<_> = board.tasks().iter().map(|t| t.id.clone()).collect();
        board.change_count(&before[0], 3);

        assert!(!board.roll_over(day(16)));
        assert_eq!(board.total_ticks(), 3);

        assert!(board.roll_over(day(17)));
        assert_eq!(board.day(), day(17));
        assert_eq!(board.total_ticks(), 0);
        let after: Vec<_> = board.tasks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(before, after);
    }
}
