pub mod nesrom;
