//! Page logic shared by the components: the section registry, the scroll
//! tracking engine, the tilt mapping, and the browser glue feeding them.

pub mod dom;
pub mod nav;
pub mod sections;
pub mod tilt;
