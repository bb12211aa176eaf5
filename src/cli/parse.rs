pub struct Parser {
    flags: Vec<Flag>,
    accept_flag_option: bool,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            flags: vec![],
            accept_flag_option: false,
        }
    }

    pub fn parse_from_vec(&mut self, source: &[impl AsRef<str>]) -> Vec<Flag> {
        for item in source {
            let should_break = self.find_word_variant(item.as_ref());
            if should_break {
                return std::mem::take(&mut self.flags);
            }
        }
        std::mem::take(&mut self.flags)
    }

    /// Check word variant
    ///
    /// * - Return : If loop should break
    fn find_word_variant(&mut self, word: &str) -> bool {
        // A pending flag consumes the word as its option
        if self.accept_flag_option {
            // Set on a flag push, thus it is safe to unwrap
            self.flags.last_mut().unwrap().option = word.to_string();
            self.accept_flag_option = false;
            return false;
        }

        // Add bare argument
        if !word.starts_with('-') {
            self.flags.push(Flag::argument(word));
            return false;
        }

        let flag = Self::match_word(word);

        if flag.early_exit {
            self.flags = vec![flag];
            return true;
        }

        if flag.need_option {
            self.accept_flag_option = true;
        }

        if flag.ftype != FlagType::None {
            self.flags.push(flag);
        }

        false
    }

    fn match_word(word: &str) -> Flag {
        match word.trim() {
            "--version" | "-v" => Flag::version(),
            "--help" | "-h" => Flag::help(),
            "--width" | "-w" => Flag::width(),
            "--rows" | "-r" => Flag::rows(),
            "--align" | "-a" => Flag::align(),
            "--output" | "-o" => Flag::output(),
            _ => Flag::empty(),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Flag {
    pub ftype: FlagType,
    pub need_option: bool,
    pub option: String,
    pub early_exit: bool,
}

impl Flag {
    pub fn empty() -> Self {
        Self {
            ftype: FlagType::None,
            need_option: false,
            option: String::new(),
            early_exit: false,
        }
    }

    pub fn argument(arg: &str) -> Self {
        Self {
            ftype: FlagType::Argument,
            need_option: false,
            option: arg.to_string(),
            early_exit: false,
        }
    }

    pub fn width() -> Self {
        Self {
            ftype: FlagType::Width,
            need_option: true,
            option: String::new(),
            early_exit: false,
        }
    }

    pub fn rows() -> Self {
        Self {
            ftype: FlagType::Rows,
            need_option: true,
            option: String::new(),
            early_exit: false,
        }
    }

    pub fn align() -> Self {
        Self {
            ftype: FlagType::Align,
            need_option: true,
            option: String::new(),
            early_exit: false,
        }
    }

    pub fn output() -> Self {
        Self {
            ftype: FlagType::Output,
            need_option: true,
            option: String::new(),
            early_exit: false,
        }
    }

    pub fn version() -> Self {
        Self {
            ftype: FlagType::Version,
            need_option: false,
            option: String::new(),
            early_exit: true,
        }
    }

    pub fn help() -> Self {
        Self {
            ftype: FlagType::Help,
            need_option: false,
            option: String::new(),
            early_exit: true,
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum FlagType {
    Argument,
    Width,
    Rows,
    Align,
    Output,
    Help,
    Version,
    None,
}
