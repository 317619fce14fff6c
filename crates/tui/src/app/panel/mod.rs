mod state;

pub(crate) use state::PanelState;
