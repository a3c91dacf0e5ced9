use jenga_core::Label;

/// Minimal block-graph interface — provides neighbor enumeration.
pub trait BlockPather {
    /// Append the labels adjacent to block `b` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, b: Label, buf: &mut Vec<Label>);
}

/// Block graph with per-node entry costs.
pub trait WeightedBlockPather: BlockPather {
    /// Cost charged when a path enters block `b`. Must be finite; the
    /// puzzle charges the label value itself.
    fn weight(&self, b: Label) -> u64;
}
