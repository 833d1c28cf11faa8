mod common;
mod decision;
mod routing;
