fn main()
{
    kuva_bin::main()
}
