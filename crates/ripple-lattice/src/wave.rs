//! Double-buffered wavefunction storage.

use crate::grid::Grid;

/// The wavefunction over the lattice, stored as separate Re and Im planes.
///
/// Two pairs of planes alternate roles in the manner of a ping-pong
/// arena: the *current* pair is the last committed state, and the
/// *staged* pair is written during an update and promoted by
/// [`commit`](WaveField::commit). After a commit the retired pair stays
/// readable as the *previous* state — the renderer needs the previous Im
/// as the staggered partner of the current one.
///
/// Phases borrow through [`RePhase`] and [`ImPhase`], which split the
/// struct so a phase can read the planes it depends on while holding the
/// single plane it writes. No normalization invariant is enforced; total
/// amplitude may drift under the explicit scheme.
///
/// Boundary sites are zero at construction and never written afterwards;
/// every operator restricts itself to the interior.
#[derive(Clone, Debug)]
pub struct WaveField {
    n: usize,
    re: Vec<f32>,
    im: Vec<f32>,
    re_stage: Vec<f32>,
    im_stage: Vec<f32>,
}

/// Split borrow for the first leapfrog phase.
///
/// Reads the current pair, writes staged Re only.
pub struct RePhase<'a> {
    /// Current Re plane.
    pub re: &'a [f32],
    /// Current Im plane.
    pub im: &'a [f32],
    /// Staged Re plane, the phase's sole output.
    pub re_next: &'a mut [f32],
}

/// Split borrow for the second leapfrog phase.
///
/// Reads the current Im and the fully staged Re, writes staged Im only.
pub struct ImPhase<'a> {
    /// Current Im plane.
    pub im: &'a [f32],
    /// Staged Re plane, finalized by the first phase.
    pub re_next: &'a [f32],
    /// Staged Im plane, the phase's sole output.
    pub im_next: &'a mut [f32],
}

impl WaveField {
    /// Create an all-zero wavefunction for `grid`.
    pub fn new(grid: &Grid) -> Self {
        let len = grid.site_count();
        Self {
            n: grid.side(),
            re: vec![0.0; len],
            im: vec![0.0; len],
            re_stage: vec![0.0; len],
            im_stage: vec![0.0; len],
        }
    }

    /// Lattice side length.
    pub fn side(&self) -> usize {
        self.n
    }

    /// Current Re plane.
    pub fn re(&self) -> &[f32] {
        &self.re
    }

    /// Current Im plane.
    pub fn im(&self) -> &[f32] {
        &self.im
    }

    /// Im plane of the previous committed state.
    ///
    /// Valid after a [`commit`](WaveField::commit) or a
    /// [`sync_previous`](WaveField::sync_previous); holds the staggered
    /// partner of the current Im.
    pub fn im_prev(&self) -> &[f32] {
        &self.im_stage
    }

    /// Mutable access to the current pair, for in-place operators
    /// (injection, seeding).
    pub fn pair_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.re, &mut self.im)
    }

    /// Borrow the planes for the first update phase.
    pub fn re_phase(&mut self) -> RePhase<'_> {
        RePhase {
            re: &self.re,
            im: &self.im,
            re_next: &mut self.re_stage,
        }
    }

    /// Borrow the planes for the second update phase.
    pub fn im_phase(&mut self) -> ImPhase<'_> {
        ImPhase {
            im: &self.im,
            re_next: &self.re_stage,
            im_next: &mut self.im_stage,
        }
    }

    /// Promote the staged pair to current; the retired pair becomes the
    /// readable previous state and the next update's staging target.
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.re, &mut self.re_stage);
        std::mem::swap(&mut self.im, &mut self.im_stage);
    }

    /// Copy the current pair into the previous/staging pair.
    ///
    /// Called after seeding so a render before the first step sees a
    /// consistent staggered partner.
    pub fn sync_previous(&mut self) {
        self.re_stage.copy_from_slice(&self.re);
        self.im_stage.copy_from_slice(&self.im);
    }

    /// Zero all four planes.
    pub fn clear(&mut self) {
        self.re.fill(0.0);
        self.im.fill(0.0);
        self.re_stage.fill(0.0);
        self.im_stage.fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> WaveField {
        WaveField::new(&Grid::new(4).unwrap())
    }

    #[test]
    fn starts_zeroed() {
        let w = field();
        assert!(w.re().iter().all(|&v| v == 0.0));
        assert!(w.im().iter().all(|&v| v == 0.0));
        assert!(w.im_prev().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn commit_swaps_pairs() {
        let mut w = field();
        w.re_phase().re_next[5] = 1.5;
        w.im_phase().im_next[5] = -2.5;
        w.commit();
        assert_eq!(w.re()[5], 1.5);
        assert_eq!(w.im()[5], -2.5);
        // Retired pair is the old (zero) state.
        assert_eq!(w.im_prev()[5], 0.0);
    }

    #[test]
    fn retired_pair_holds_previous_state() {
        let mut w = field();
        w.pair_mut().1[5] = 3.0;
        w.sync_previous();
        w.im_phase().im_next[5] = 7.0;
        w.re_phase().re_next[5] = 0.0;
        w.commit();
        assert_eq!(w.im()[5], 7.0);
        assert_eq!(w.im_prev()[5], 3.0);
    }

    #[test]
    fn clear_zeroes_both_pairs() {
        let mut w = field();
        w.pair_mut().0[3] = 1.0;
        w.sync_previous();
        w.clear();
        assert!(w.re().iter().all(|&v| v == 0.0));
        assert!(w.im_prev().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn phase_views_expose_whole_planes() {
        let mut w = field();
        assert_eq!(w.re_phase().re_next.len(), 16);
        assert_eq!(w.im_phase().re_next.len(), 16);
    }
}
