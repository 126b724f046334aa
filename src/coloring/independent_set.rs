use bit_set::BitSet;

use super::Coloring;
use crate::instance::{Instance, VertexId};

/** builds the coloring one color at a time, RLF style: each class grows a
maximal independent set among the uncolored vertices (picking the largest
degree first), then a fresh color starts over.
    1. pick the uncolored, unblocked vertex with the largest degree
    2. add it to the current class and block its neighbors
    3. when no vertex is left unblocked, open a new class
*/
pub fn independent_set_seeded(inst: &Instance) -> Coloring {
    let n = inst.n();
    let mut colored: BitSet = BitSet::default();
    let mut nb_colored = 0;
    let mut res: Coloring = Vec::new();
    while nb_colored < n {
        let mut class: Vec<VertexId> = Vec::new();
        let mut blocked: BitSet = BitSet::default(); // vertices seeing the class
        loop {
            let next = (0..n)
                .filter(|v| !colored.contains(*v) && !blocked.contains(*v))
                .max_by_key(|v| inst.degree(*v));
            match next {
                None => break, // class is maximal, open a new color
                Some(v) => {
                    class.push(v);
                    colored.insert(v);
                    nb_colored += 1;
                    for &u in inst.adj(v) {
                        blocked.insert(u);
                    }
                }
            }
        }
        res.push(class);
    }
    res
}
