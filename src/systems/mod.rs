pub mod discretizer;
pub mod fuselage_analysis;
pub mod inertia;
pub mod topology;
pub mod wing_analysis;

pub use discretizer::{
    chordwise_stations, fuselage_segment_nodes, spoke_fractions, wing_segment_nodes, SegmentNodes,
};
pub use fuselage_analysis::{analyse_fuselage, analyse_fuselages, sample_profile, ProfileSample};
pub use inertia::{
    aircraft_inertia, engine_inertia, fuselage_inertia, run_balance, wing_inertia,
    BalanceReport, ComponentInertia, InertiaReport,
};
pub use topology::{find_root_segment, ordered_chain, reorder_segments, section_order, TopologyError};
pub use wing_analysis::{analyse_wing, analyse_wings};
