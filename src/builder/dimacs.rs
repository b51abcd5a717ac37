use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

use std::{collections::HashMap, io::BufRead};

/// Information about a parse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms and clauses given in the problem specification, if one was given.
    pub expected: Option<(usize, usize)>,

    /// The count of atoms read.
    pub added_atoms: usize,

    /// The count of clauses read, including any tautologies.
    pub added_clauses: usize,
}

impl Context {
    /// Reads a DIMACS file into the context.
    ///
    /// Atoms of the file are mapped to fresh atoms of the context, in order of appearance.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use clue_sat::context::Context;
    /// # use clue_sat::reports::Report;
    /// # use std::io::Write;
    /// let mut the_context = Context::default();
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// p cnf 4 7
    ///  1  2       0
    ///  1 -2       0
    /// -1  2       0
    /// -1 -2       0
    ///  1  2  3    0
    /// -1  2 -3    0
    ///        3 -4 0
    /// ");
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.expected, Some((4, 7)));
    /// assert_eq!(info.added_clauses, 7);
    /// assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, ErrorKind> {
        let mut info = ParserInfo::default();
        let mut atom_map = HashMap::<u32, crate::structures::atom::Atom>::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter + 1).into()),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue 'formula_loop,

                Some('%') => break 'formula_loop,

                Some('p') => {
                    if info.expected.is_some() || info.added_clauses > 0 {
                        return Err(err::ParseError::ProblemSpecification.into());
                    }
                    info.expected = Some(problem_specification(&buffer)?);
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        let Ok(parsed_int) = item.parse::<i32>() else {
                            log::error!(target: targets::PARSE, "Unreadable literal '{item}' at line {line_counter}");
                            return Err(err::ParseError::Line(line_counter).into());
                        };

                        if parsed_int == 0 {
                            let the_clause = std::mem::take(&mut clause_buffer);
                            self.add_clause(the_clause)?;
                            info.added_clauses += 1;
                            continue;
                        }

                        let atom = match atom_map.get(&parsed_int.unsigned_abs()) {
                            Some(atom) => *atom,
                            None => {
                                let fresh_atom = self.fresh_atom()?;
                                atom_map.insert(parsed_int.unsigned_abs(), fresh_atom);
                                info.added_atoms += 1;
                                fresh_atom
                            }
                        };
                        clause_buffer.push(CLiteral::new(atom, parsed_int.is_positive()));
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            log::error!(target: targets::PARSE, "Unterminated clause at end of input");
            return Err(err::ParseError::Line(line_counter).into());
        }

        log::info!(target: targets::PARSE, "Read {} atoms and {} clauses", info.added_atoms, info.added_clauses);
        Ok(info)
    }
}

/// The count of atoms and clauses from a problem specification line.
fn problem_specification(line: &str) -> Result<(usize, usize), err::ParseError> {
    let mut problem_details = line.split_whitespace();

    if problem_details.next() != Some("p") || problem_details.next() != Some("cnf") {
        return Err(err::ParseError::ProblemSpecification);
    }

    let mut count = || -> Result<usize, err::ParseError> {
        match problem_details.next().map(str::parse::<usize>) {
            Some(Ok(count)) => Ok(count),
            _ => Err(err::ParseError::ProblemSpecification),
        }
    };

    let atom_count = count()?;
    let clause_count = count()?;
    Ok((atom_count, clause_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::Report;

    #[test]
    fn comments_and_blank_lines() {
        let mut the_context = Context::default();
        let dimacs = "c a comment\n\np cnf 2 2\n1 -2 0\nc another\n2 0\n";

        let info = the_context.read_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(info.added_atoms, 2);
        assert_eq!(info.added_clauses, 2);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn bad_literal() {
        let mut the_context = Context::default();
        let dimacs = "p cnf 2 1\n1 x 0\n";

        assert_eq!(
            the_context.read_dimacs(dimacs.as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Line(2)))
        );
    }

    #[test]
    fn bad_problem_specification() {
        let mut the_context = Context::default();
        assert_eq!(
            the_context.read_dimacs("p cnf two 1\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn clauses_may_span_lines() {
        let mut the_context = Context::default();
        let info = the_context.read_dimacs("1 2\n-3 0 3\n0\n".as_bytes()).unwrap();

        assert_eq!(info.added_clauses, 2);
        assert_eq!(the_context.clause_db.clause_count(), 2);
    }
}
