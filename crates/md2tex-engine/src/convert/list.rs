use super::{options::Options, patterns::patterns};

/// Environment used for cheat-sheet bullets.
pub const BULLET_ENVIRONMENT: &str = "itemize";

/// Columns per nesting level once tabs are expanded.
pub const INDENT_WIDTH: usize = 4;

/// Streaming converter from indented `-` bullets to nested list environments.
///
/// State is the current depth, `None` while no list is open. Each item opens
/// or closes exactly the difference between its level and the current depth;
/// a jump of several levels is not rejected.
pub struct ListConverter<'a> {
    environment: &'a str,
    list_options: Option<&'a str>,
    depth: Option<usize>,
    out: Vec<String>,
}

impl<'a> ListConverter<'a> {
    pub fn new(environment: &'a str, list_options: Option<&'a str>) -> Self {
        Self {
            environment,
            list_options,
            depth: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &str) {
        let Some(c) = patterns().list_item.captures(line) else {
            self.close_all();
            self.out.push(line.to_string());
            return;
        };

        let level = indent_level(&c[1]);
        match self.depth {
            None => self.open(level + 1),
            Some(depth) if level > depth => self.open(level - depth),
            Some(depth) if level < depth => self.close(depth - level),
            Some(_) => {}
        }
        self.depth = Some(level);
        match c.get(2).map(|m| m.as_str().trim()).filter(|item| !item.is_empty()) {
            Some(item) => self.out.push(format!("\\item {item}")),
            None => self.out.push("\\item".to_string()),
        }
    }

    pub fn finish(mut self) -> String {
        self.close_all();
        self.out.join("\n")
    }

    fn open(&mut self, n: usize) {
        let begin = match self.list_options {
            Some(opts) => format!("\\begin{{{}}}[{opts}]", self.environment),
            None => format!("\\begin{{{}}}", self.environment),
        };
        for _ in 0..n {
            self.out.push(begin.clone());
        }
    }

    fn close(&mut self, n: usize) {
        let end = format!("\\end{{{}}}", self.environment);
        for _ in 0..n {
            self.out.push(end.clone());
        }
    }

    fn close_all(&mut self) {
        if let Some(depth) = self.depth.take() {
            self.close(depth + 1);
        }
    }
}

/// Nesting level of an item from its leading whitespace.
pub fn indent_level(leading: &str) -> usize {
    let columns: usize = leading
        .chars()
        .map(|c| if c == '\t' { INDENT_WIDTH } else { 1 })
        .sum();
    columns / INDENT_WIDTH
}

pub fn convert_lists(text: &str, options: &Options) -> String {
    let converter = ListConverter::new(&options.list_environment, options.list_options.as_deref());
    convert_with(converter, text)
}

/// Cheat-sheet bullets: plain `itemize`, no list options.
pub fn convert_bullets(text: &str) -> String {
    convert_with(ListConverter::new(BULLET_ENVIRONMENT, None), text)
}

fn convert_with(mut converter: ListConverter<'_>, text: &str) -> String {
    for line in text.split('\n') {
        converter.push(line);
    }
    converter.finish()
}
