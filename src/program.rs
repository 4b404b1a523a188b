// program.rs - Compiled form: instruction set and the Program container.
//
// One instruction per slot, absolute jump targets. The buffer and both side
// tables are immutable once the compiler hands the Program over, so a
// Program can be shared across threads freely.

use std::fmt;

use crate::classes::CharClass;

/// A single VM instruction.
///
/// `Split` and `SplitJmp` both fork the current thread; they differ in which
/// branch the VM explores first. `Split` prefers the fall-through path and
/// queues the target, `SplitJmp` the reverse. Thread priority is what turns
/// that choice into greedy/lazy and first-alternative-wins semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Insn {
    /// Match one literal character.
    Char(char),
    /// Match any character except a line terminator.
    Dot,
    /// Match any character at all. Used by the search preamble.
    Any,
    /// Match one character against the class table entry at this index.
    Class(usize),
    LineStart,
    LineEnd,
    WordBoundary,
    NotWordBoundary,
    /// Record the current position in the numbered capture slot.
    Save(usize),
    Split(usize),
    SplitJmp(usize),
    Jmp(usize),
    /// Zero-width assertion backed by the lookaround table entry at `index`.
    Look {
        behind: bool,
        negative: bool,
        index: usize,
    },
}

/// Jump-target placeholder, patched by the assembler before the buffer is
/// sealed.
pub(crate) const UNSET: usize = usize::MAX;

/// A compiled pattern: the instruction buffer plus its metadata and side
/// tables. Execution falling off the end of the buffer is the accept state.
#[derive(Clone)]
pub(crate) struct Program {
    pub(crate) insns: Box<[Insn]>,
    /// Number of capturing groups, including the implicit group 0.
    pub(crate) group_count: usize,
    /// Offset just past the unanchored-search preamble; anchored execution
    /// starts here.
    pub(crate) preamble_end: usize,
    pub(crate) classes: Box<[CharClass]>,
    pub(crate) looks: Box<[Program]>,
}

impl Program {
    /// Extract the literal text if this program is a plain string match:
    /// nothing but `Char` instructions between the group-0 save slots, with
    /// no branching, classes, or assertions.
    pub(crate) fn plain_string(&self) -> Option<String> {
        let mut i = self.preamble_end;
        if self.insns.get(i) != Some(&Insn::Save(0)) {
            return None;
        }
        i += 1;
        let mut text = String::new();
        while let Some(&Insn::Char(c)) = self.insns.get(i) {
            text.push(c);
            i += 1;
        }
        if self.insns.get(i) != Some(&Insn::Save(1)) {
            return None;
        }
        (i + 1 == self.insns.len()).then_some(text)
    }

    /// Build the program that matches the same language scanned backward,
    /// used for lookbehind bodies.
    ///
    /// Instruction boundaries form a graph: a consuming or assertion
    /// instruction at `i` is a labeled edge `i -> i+1`, jumps and splits are
    /// unlabeled edges. Reversing every edge and swapping entry with accept
    /// yields the backward matcher; the graph is then re-linearized into a
    /// fresh buffer, with `Split` chains encoding former join points.
    ///
    /// Only capture-free sub-programs are ever reversed; the grammar rejects
    /// capturing groups inside lookaround bodies.
    pub(crate) fn reverse(&self) -> Program {
        let n = self.insns.len();
        // edges[v] = out-edges of boundary v in the reversed graph, highest
        // priority first: the forward in-edges of v, in scan order.
        let mut edges: Vec<Vec<(Option<Insn>, usize)>> = vec![Vec::new(); n + 1];
        for (i, insn) in self.insns.iter().enumerate() {
            match *insn {
                Insn::Jmp(t) => edges[t].push((None, i)),
                Insn::Split(t) => {
                    edges[i + 1].push((None, i));
                    edges[t].push((None, i));
                }
                Insn::SplitJmp(t) => {
                    edges[t].push((None, i));
                    edges[i + 1].push((None, i));
                }
                Insn::Save(_) => {
                    debug_assert!(false, "capture slot in a reversible program");
                }
                ref step => edges[i + 1].push((Some(step.clone()), i)),
            }
        }

        // Re-linearize from the reversed entry (the forward accept, n).
        // Boundary 0 is the reversed accept and emits nothing; jumps onto it
        // resolve to the end of the new buffer.
        let mut out: Vec<Insn> = Vec::new();
        let mut addr: Vec<Option<usize>> = vec![None; n + 1];
        let mut patches: Vec<(usize, usize)> = Vec::new();
        let mut work = vec![n];
        while let Some(v) = work.pop() {
            if v == 0 || addr[v].is_some() {
                continue;
            }
            addr[v] = Some(out.len());
            let es = &edges[v];
            debug_assert!(!es.is_empty(), "reachable boundary with no edges");
            // Chain of splits falling through to the first edge's block;
            // targets listed last-to-first so queue order matches priority.
            let chain = out.len();
            for _ in 1..es.len() {
                out.push(Insn::Split(UNSET));
            }
            let mut blocks = Vec::with_capacity(es.len());
            for (label, to) in es {
                blocks.push(out.len());
                if let Some(step) = label {
                    out.push(step.clone());
                }
                patches.push((out.len(), *to));
                out.push(Insn::Jmp(UNSET));
                work.push(*to);
            }
            for (k, block) in blocks.iter().enumerate().skip(1) {
                out[chain + es.len() - 1 - k] = Insn::Split(*block);
            }
        }

        let end = out.len();
        for (at, node) in patches {
            let target = if node == 0 {
                end
            } else {
                addr[node].expect("jump target never linearized")
            };
            out[at] = Insn::Jmp(target);
        }

        Program {
            insns: out.into_boxed_slice(),
            group_count: self.group_count,
            preamble_end: 0,
            classes: self.classes.clone(),
            looks: self.looks.clone(),
        }
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Program {{ groups: {}, preamble_end: {}, classes: {}, looks: {} }}",
            self.group_count,
            self.preamble_end,
            self.classes.len(),
            self.looks.len()
        )?;
        for (i, insn) in self.insns.iter().enumerate() {
            writeln!(f, "{i:04} {insn:?}")?;
        }
        Ok(())
    }
}
