mod config;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use combo_core::{
    key_event::InputEvent,
    session::Session,
    view::{EMPTY_MENU_TEXT, Frontend, ViewState},
};
use combo_match::StrategyKind;
use combo_menu::MenuList;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{FileConfig, MenuSource, Overrides};

/// 多选过滤组合框的终端演示
#[derive(Parser, Debug)]
#[command(name = "combo_cli")]
#[command(version, about, long_about = None)]
struct Args {
    /// 候选列表文件（每行一个）
    #[arg(long)]
    menu: Option<PathBuf>,

    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 输入框占位文本
    #[arg(long)]
    placeholder: Option<String>,

    /// 匹配策略
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// 匹配时区分大小写（精确匹配自动选中始终不区分）
    #[arg(long, overrides_with = "no_case_sensitive")]
    case_sensitive: bool,

    /// 匹配时不区分大小写（覆盖配置文件）
    #[arg(long, overrides_with = "case_sensitive")]
    no_case_sensitive: bool,

    /// 打开 debug 日志
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Prefix,
    Substring,
    Subsequence,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Prefix => StrategyKind::Prefix,
            StrategyArg::Substring => StrategyKind::Substring,
            StrategyArg::Subsequence => StrategyKind::Subsequence,
        }
    }
}

/// 把视图打印到 stdout 的前端。
struct Terminal<W> {
    out: W,
    menu_open: bool,
}

impl<W: Write> Terminal<W> {
    fn print_view(&mut self, view: &ViewState) -> io::Result<()> {
        let tokens: Vec<String> = view.selected.iter().map(|s| format!("[{s} x]")).collect();
        let input = if view.value.is_empty() {
            format!("({})", view.placeholder)
        } else {
            view.value.clone()
        };
        writeln!(self.out, "> {} {input}", tokens.join(" "))?;
        if !self.menu_open {
            return Ok(());
        }
        if view.has_results() {
            for (i, item) in view.filtered.iter().enumerate() {
                writeln!(self.out, "  {}. {item}", i + 1)?;
            }
        } else {
            writeln!(self.out, "  {EMPTY_MENU_TEXT}")?;
        }
        Ok(())
    }
}

impl<W: Write> Frontend for Terminal<W> {
    fn render(&mut self, view: &ViewState) {
        if let Err(e) = self.print_view(view) {
            tracing::warn!(error = %e, "failed to render view");
        }
    }

    fn focus_input(&mut self) {
        tracing::trace!("focus input");
    }

    fn open_menu(&mut self) {
        if !self.menu_open {
            self.menu_open = true;
            tracing::debug!("menu opened");
        }
    }
}

/// 一行 REPL 输入对应的操作。
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Event(InputEvent),
    Pick(usize),
    SetValue(String),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (head, rest) = match line.split_once(' ') {
        Some((h, r)) => (h, r.trim()),
        None => (line, ""),
    };
    let cmd = match head {
        ":q" | ":quit" | ":exit" => Command::Quit,
        ":h" | ":help" => Command::Help,
        ":show" => Command::Show,
        ":bs" => Command::Event(InputEvent::DeleteKeyOnEmptyInput),
        ":open" => Command::Event(InputEvent::ContainerActivated),
        ":rm" => Command::Event(InputEvent::TokenRemoved(rest.to_owned())),
        ":set" => Command::SetValue(rest.to_owned()),
        ":pick" => Command::Pick(rest.parse::<usize>().ok().filter(|n| *n > 0)?),
        _ if head.starts_with(':') => return None,
        _ => Command::Event(InputEvent::TextChanged(line.to_owned())),
    };
    Some(cmd)
}

fn print_help() {
    println!("直接输入文本 = 输入框内容变化（完整命中候选时自动选中）");
    println!(":pick N 选中第 N 个候选 | :rm <text> 移除标签 | :bs 空输入删除键");
    println!(":open 点击容器 | :set <text> 外部写入 value | :show 显示状态 | :q 退出");
}

fn default_menu_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("asset").join("menu.txt")
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn case_override(args: &Args) -> Option<bool> {
    match (args.case_sensitive, args.no_case_sensitive) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn build_session(args: &Args) -> Result<Session> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let overrides = Overrides {
        placeholder: args.placeholder.clone(),
        menu_file: args.menu.clone(),
        strategy: args.strategy.map(StrategyKind::from),
        case_sensitive: case_override(args),
    };
    let resolved = config::resolve(file, overrides, default_menu_path());

    let menu: MenuList = match resolved.menu {
        MenuSource::Inline(items) => MenuList::from(items),
        MenuSource::File(path) => MenuList::from_path(&path)
            .with_context(|| format!("cannot load menu from {}", path.display()))?,
    };
    info!(count = menu.len(), strategy = ?resolved.matcher.strategy, "menu ready");

    let mut session = Session::new(menu.into_store());
    session.set_filter_menu(resolved.matcher.into_predicate());
    if let Some(p) = resolved.placeholder {
        session.set_placeholder(p);
    }
    Ok(session)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let mut session = build_session(&args)?;
    let mut terminal = Terminal {
        out: io::stdout(),
        menu_open: false,
    };
    repl(&mut session, &mut terminal)
}

fn repl<W: Write>(session: &mut Session, terminal: &mut Terminal<W>) -> Result<()> {
    let mut line = String::new();
    println!("combo demo | {} candidates | :h 查看帮助", session.store().menu_list().len());
    terminal.render(&session.view());

    loop {
        line.clear();
        print!("combo> ");
        io::stdout().flush()?;
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let Some(cmd) = parse_command(&line) else {
            println!("未知命令，输入 :h 查看帮助");
            continue;
        };
        match cmd {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::Show => terminal.render(&session.view()),
            Command::SetValue(value) => {
                session.set_value(value);
                terminal.render(&session.view());
            }
            Command::Pick(n) => {
                let Some(item) = session.view().filtered.get(n - 1).cloned() else {
                    println!("没有第 {n} 个候选");
                    continue;
                };
                session.dispatch(InputEvent::CandidateChosen(item), terminal);
            }
            Command::Event(ev) => {
                session.dispatch(ev, terminal);
            }
        }
    }

    println!("selected: {}", session.selected().join(", "));
    Ok(())
}
