pub mod get_sidebar;
