//! 交互式菜单主循环
//!
//! 五个固定菜单项，逐行读取 stdin。业务校验在 `TaskStore` 与 `validate`
//! 中完成，这里只负责提示、读入与结果展示；错误打印后回到菜单，
//! 不会终止进程。

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::store::TaskStore;
use crate::validate;

/// 交互式应用状态
pub struct App {
    store: TaskStore,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    /// 运行主循环，直到用户选择退出或 stdin 关闭
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            print_menu();
            let Some(choice) = prompt("Choose an option: ")? else {
                // stdin 关闭，等同于选择退出
                println!();
                break;
            };
            match choice.trim() {
                "1" => self.list(),
                "2" => self.add()?,
                "3" => self.delete()?,
                "4" => self.mark_done()?,
                "5" => {
                    println!("Goodbye!");
                    break;
                }
                _ => println!("Invalid choice."),
            }
        }
        Ok(())
    }

    fn list(&self) {
        match self.store.rows() {
            None => println!("No tasks found."),
            Some(rows) => {
                for row in rows {
                    println!("{}", row);
                }
            }
        }
    }

    fn add(&mut self) -> io::Result<()> {
        let Some(title) = prompt("Enter task: ")? else {
            return Ok(());
        };
        let due = prompt_due()?;
        let priority = prompt("Enter priority (high/medium/low, optional): ")?
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        match self.store.add(&title, due, priority) {
            Ok(()) => println!("Task added!"),
            Err(e) => println!("{}", e),
        }
        Ok(())
    }

    fn delete(&mut self) -> io::Result<()> {
        self.list();
        let Some(position) = prompt_position("Enter task number to delete: ")? else {
            return Ok(());
        };
        match self.store.delete(position) {
            Ok(removed) => println!("Removed: {}", removed.title),
            Err(e) => println!("{}", e),
        }
        Ok(())
    }

    fn mark_done(&mut self) -> io::Result<()> {
        self.list();
        let Some(position) = prompt_position("Enter task number to mark as done: ")? else {
            return Ok(());
        };
        match self.store.mark_done(position) {
            Ok(task) => println!("Marked as done: {}", task.title),
            Err(e) => println!("{}", e),
        }
        Ok(())
    }
}

fn print_menu() {
    println!();
    println!("--- Twig To-Do ---");
    println!("1. List tasks");
    println!("2. Add task");
    println!("3. Delete task");
    println!("4. Mark task as done");
    println!("5. Quit");
}

/// 读取截止日期：校验失败则提示原因并重试，空输入表示不设截止日期
fn prompt_due() -> io::Result<Option<NaiveDate>> {
    loop {
        let Some(input) = prompt("Enter due date (YYYY-MM-DD, optional): ")? else {
            return Ok(None);
        };
        match validate::validate_due_date(&input) {
            Ok(due) => return Ok(due),
            Err(reason) => println!("{}", reason),
        }
    }
}

/// 读取 1-based 任务序号；解析失败只提示一次，不重试
fn prompt_position(msg: &str) -> io::Result<Option<usize>> {
    let Some(input) = prompt(msg)? else {
        return Ok(None);
    };
    match input.trim().parse::<usize>() {
        Ok(position) => Ok(Some(position)),
        Err(_) => {
            println!("Please enter a valid number.");
            Ok(None)
        }
    }
}

/// 打印提示并读取一行；stdin 关闭返回 None
fn prompt(msg: &str) -> io::Result<Option<String>> {
    print!("{}", msg);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
