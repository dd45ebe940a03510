use crate::app::{InspectOptions, PresentOptions};

pub(in crate::entry) enum RunPlan {
    Inspect(InspectOptions),
    Present(PresentOptions),
}
